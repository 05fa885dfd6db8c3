//! yomiage - Convert a text file to speech with a local VOICEVOX engine.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use yomiage_voicevox::PHONEME_LENGTH_UNSET;

mod args;
mod config;
mod error;
mod pipeline;
mod util;

#[cfg(test)]
mod testing;

use config::RuntimeConfig;
use error::CliError;
use util::write_error;

/// yomiage - Convert a text file to speech with a local VOICEVOX engine.
///
/// Reads the input text, asks the engine for an audio query with the chosen
/// speaker, applies the voice parameters below and writes the rendered audio.
///
/// Flags may be written Go-style with a single dash (-actor, -list-actors).
///
/// Configuration contexts are read from ~/.yomiage/voicevox/config.yaml.
#[derive(Parser, Debug)]
#[command(name = "yomiage")]
#[command(about = "Text file to speech with a local VOICEVOX engine")]
#[command(version)]
pub struct Cli {
    /// Input text file (required)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output audio file (required)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Speaker name [default: ずんだもん]
    #[arg(long)]
    pub actor: Option<String>,

    /// Port of the VOICEVOX engine on localhost [default: 50021]
    #[arg(long)]
    pub port: Option<u16>,

    /// List available speakers and exit
    #[arg(long = "list-actors")]
    pub list_actors: bool,

    /// Speed scale
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub speed: f64,

    /// Pitch scale (around ±0.15 is recommended)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pitch: f64,

    /// Intonation scale
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub intonation: f64,

    /// Volume scale
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub volume: f64,

    /// Silence before the voice in seconds; -1 keeps the engine default
    #[arg(long = "pre-phoneme", default_value_t = PHONEME_LENGTH_UNSET, allow_negative_numbers = true)]
    pub pre_phoneme: f64,

    /// Silence after the voice in seconds; -1 keeps the engine default
    #[arg(long = "post-phoneme", default_value_t = PHONEME_LENGTH_UNSET, allow_negative_numbers = true)]
    pub post_phoneme: f64,

    /// Config file (default is ~/.yomiage/voicevox/config.yaml)
    #[arg(long)]
    pub config: Option<String>,

    /// Context name to use
    #[arg(short = 'c', long)]
    pub context: Option<String>,

    /// Print the speaker list as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Print the speaker list as YAML
    #[arg(long)]
    pub yaml: bool,

    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let argv = args::normalize_args(std::env::args_os(), &Cli::command());
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = report_error(&e, &mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    // Missing paths must surface as usage, whatever state the config file is in.
    if !cli.list_actors && (cli.input.is_none() || cli.output.is_none()) {
        return Err(CliError::MissingArgs.into());
    }

    let ctx = util::get_context(cli)?;
    let config = RuntimeConfig::from_cli(cli, ctx.as_ref());
    tracing::debug!(?config, "runtime config");

    let mut stdout = std::io::stdout();
    pipeline::run(&config, &mut stdout).await
}

/// Writes a failed run to `w`: the usage text first when paths are missing.
fn report_error<W: Write>(err: &anyhow::Error, w: &mut W) -> std::io::Result<()> {
    if matches!(err.downcast_ref::<CliError>(), Some(CliError::MissingArgs)) {
        writeln!(w, "{}", Cli::command().render_help())?;
    }
    write_error(w, &err.to_string())
}
