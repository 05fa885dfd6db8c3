//! Errors raised by the CLI itself (as opposed to the engine client).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("input (-i) and output (-o) files are required")]
    MissingArgs,

    #[error("failed to read input file '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to save output file '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("context '{0}' not found")]
    ContextNotFound(String),
}
