//! Runtime configuration assembled from flags and the config context.

use std::path::PathBuf;

use yomiage_cli::{Context, OutputFormat};
use yomiage_voicevox::{QueryOverrides, DEFAULT_BASE_URL};

use crate::Cli;

/// Speaker used when neither `-actor` nor the context names one.
pub const DEFAULT_ACTOR: &str = "ずんだもん";

/// Settings for one run. Built once, never modified.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Engine base URL.
    pub base_url: String,
    /// Speaker display name to resolve.
    pub actor: String,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// List speakers instead of synthesizing.
    pub list_actors: bool,
    /// Structured listing format; `None` prints the human-readable list.
    pub list_format: Option<OutputFormat>,
    pub overrides: QueryOverrides,
}

impl RuntimeConfig {
    /// Builds the configuration.
    ///
    /// Flags win over the context, which wins over built-in defaults.
    pub fn from_cli(cli: &Cli, ctx: Option<&Context>) -> Self {
        let base_url = match (cli.port, ctx) {
            (Some(port), _) => format!("http://localhost:{}", port),
            (None, Some(ctx)) if !ctx.base_url.is_empty() => ctx.base_url.clone(),
            _ => DEFAULT_BASE_URL.to_string(),
        };

        let actor = match (&cli.actor, ctx) {
            (Some(actor), _) => actor.clone(),
            (None, Some(ctx)) if !ctx.default_voice.is_empty() => ctx.default_voice.clone(),
            _ => DEFAULT_ACTOR.to_string(),
        };

        let list_format = if cli.json {
            Some(OutputFormat::Json)
        } else if cli.yaml {
            Some(OutputFormat::Yaml)
        } else {
            None
        };

        Self {
            base_url,
            actor,
            input: cli.input.clone(),
            output: cli.output.clone(),
            list_actors: cli.list_actors,
            list_format,
            overrides: QueryOverrides {
                speed_scale: cli.speed,
                pitch_scale: cli.pitch,
                intonation_scale: cli.intonation,
                volume_scale: cli.volume,
                pre_phoneme_length: cli.pre_phoneme,
                post_phoneme_length: cli.post_phoneme,
            },
        }
    }
}
