//! The text-to-audio pipeline and the speaker listing.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use yomiage_cli::{format_bytes, Output, OutputFormat};
use yomiage_voicevox::{Client, ResolvedSpeaker, Speaker};

use crate::config::RuntimeConfig;
use crate::error::CliError;
use crate::util::{print_info, print_success};

/// Outcome of a successful synthesis run.
#[derive(Debug)]
pub struct SynthesisReport {
    pub speaker: ResolvedSpeaker,
    pub output: PathBuf,
    pub size: usize,
    /// Wall-clock time of the synthesis request alone.
    pub elapsed: Duration,
}

/// Runs the configured mode: the speaker listing goes to `out`, progress to
/// stderr.
pub async fn run<W: Write>(config: &RuntimeConfig, out: &mut W) -> anyhow::Result<()> {
    let client = Client::builder().base_url(&config.base_url).build()?;

    if config.list_actors {
        return list_speakers(&client, config.list_format, out).await;
    }

    let (input, output) = match (&config.input, &config.output) {
        (Some(input), Some(output)) => (input.as_path(), output.as_path()),
        _ => return Err(CliError::MissingArgs.into()),
    };

    let report = synthesize(&client, config, input, output).await?;

    print_success(&format!(
        "Done! (speaker: {}, synthesis took {:.2?})",
        report.speaker.name, report.elapsed
    ));
    print_success(&format!(
        "Audio saved to '{}' ({})",
        report.output.display(),
        format_bytes(report.size)
    ));
    Ok(())
}

/// Prints the engine's speakers and their styles in catalog order.
pub async fn list_speakers<W: Write>(
    client: &Client,
    format: Option<OutputFormat>,
    out: &mut W,
) -> anyhow::Result<()> {
    let speakers = client.speakers().list().await?;

    match format {
        Some(format) => Output::new(format).write(out, &speakers)?,
        None => out.write_all(render_speakers(&speakers).as_bytes())?,
    }
    out.flush()?;
    Ok(())
}

/// Renders the human-readable speaker list.
pub fn render_speakers(speakers: &[Speaker]) -> String {
    let mut s = String::from("--- Available speakers ---\n");
    for speaker in speakers {
        s.push_str(&format!("Speaker: {}\n", speaker.name));
        for style in &speaker.styles {
            s.push_str(&format!("  - Style: {} (ID: {})\n", style.name, style.id));
        }
    }
    s.push_str("--------------------------\n");
    s.push_str("Choose a speaker with `-actor \"<speaker name>\"`.\n");
    s
}

/// Resolves the speaker, synthesizes the input text and writes the audio.
pub async fn synthesize(
    client: &Client,
    config: &RuntimeConfig,
    input: &Path,
    output: &Path,
) -> anyhow::Result<SynthesisReport> {
    let speaker = client.speakers().resolve(&config.actor).await?;
    print_info(&format!(
        "Using speaker '{}' (style: {}, ID: {})",
        speaker.name, speaker.style_name, speaker.id
    ));

    print_info(&format!("Reading '{}'...", input.display()));
    let text = std::fs::read_to_string(input).map_err(|source| CliError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!(chars = text.chars().count(), "input text loaded");

    print_info("Creating audio query...");
    let mut query = client.synthesis().audio_query(&text, speaker.id).await?;

    print_info("Adjusting parameters...");
    config.overrides.apply(&mut query);
    tracing::debug!(
        speed = query.speed_scale,
        pitch = query.pitch_scale,
        intonation = query.intonation_scale,
        volume = query.volume_scale,
        pre_phoneme = query.pre_phoneme_length,
        post_phoneme = query.post_phoneme_length,
        "query parameters"
    );

    print_info("Synthesizing...");
    let start = Instant::now();
    let audio = client.synthesis().synthesize(&query, speaker.id).await?;
    let elapsed = start.elapsed();

    std::fs::write(output, &audio).map_err(|source| CliError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(SynthesisReport {
        speaker,
        output: output.to_path_buf(),
        size: audio.len(),
        elapsed,
    })
}
