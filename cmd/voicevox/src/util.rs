//! Utility functions for the CLI.

use yomiage_cli::config::{load_config, Context};

use crate::error::CliError;
use crate::Cli;

const APP_NAME: &str = "voicevox";

/// Gets the context configuration to use, if any.
///
/// An explicitly named context must exist; otherwise the current context is
/// used when one is set.
pub fn get_context(cli: &Cli) -> anyhow::Result<Option<Context>> {
    let cfg = load_config(APP_NAME, cli.config.as_deref())?;

    match cfg.resolve_context(cli.context.as_deref()) {
        Some(ctx) => Ok(Some(ctx.clone())),
        None => match cli.context.as_deref() {
            Some(name) if !name.is_empty() => Err(CliError::ContextNotFound(name.to_string()).into()),
            _ => Ok(None),
        },
    }
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", msg);
}

/// Writes error message to `w`.
pub fn write_error<W: std::io::Write>(w: &mut W, msg: &str) -> std::io::Result<()> {
    writeln!(w, "\x1b[31m✗\x1b[0m {}", msg)
}

/// Prints info message.
pub fn print_info(msg: &str) {
    eprintln!("\x1b[34mℹ\x1b[0m {}", msg);
}
