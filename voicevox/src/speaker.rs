//! Speaker catalog service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{
    error::{Error, Result},
    http::HttpClient,
};

/// Speaker catalog service.
pub struct SpeakerService {
    http: Arc<HttpClient>,
}

impl SpeakerService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists the speakers the engine offers, in catalog order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// for speaker in client.speakers().list().await? {
    ///     for style in &speaker.styles {
    ///         println!("{} / {} ({})", speaker.name, style.name, style.id);
    ///     }
    /// }
    /// ```
    pub async fn list(&self) -> Result<Vec<Speaker>> {
        self.http.get_json("/speakers").await
    }

    /// Resolves a speaker display name to the first style of that speaker.
    ///
    /// The match is exact and case-sensitive. The first style in catalog
    /// order is chosen, whatever its name.
    pub async fn resolve(&self, name: &str) -> Result<ResolvedSpeaker> {
        let speakers = self.list().await?;
        let resolved = find_speaker(&speakers, name)
            .ok_or_else(|| Error::SpeakerNotFound(name.to_string()))?;

        tracing::info!(
            speaker = %resolved.name,
            style = %resolved.style_name,
            id = resolved.id,
            "resolved speaker"
        );
        Ok(resolved)
    }
}

/// Finds the first speaker named `name` and returns its first style.
///
/// Speakers with that name but no styles are skipped. Returns `None` if no
/// speaker with that name has a style.
pub fn find_speaker(speakers: &[Speaker], name: &str) -> Option<ResolvedSpeaker> {
    speakers
        .iter()
        .filter(|s| s.name == name)
        .find_map(|speaker| {
            speaker.styles.first().map(|style| ResolvedSpeaker {
                name: speaker.name.clone(),
                style_name: style.name.clone(),
                id: style.id,
            })
        })
}

// ==================== Types ====================

/// A voice persona offered by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    /// Display name.
    pub name: String,

    /// Stable unique identifier.
    #[serde(default)]
    pub speaker_uuid: String,

    /// Speaking styles in catalog order.
    #[serde(default)]
    pub styles: Vec<SpeakerStyle>,

    /// Speaker model version.
    #[serde(default)]
    pub version: String,
}

/// A speaking style under a speaker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeakerStyle {
    /// Display name, e.g. "ノーマル".
    pub name: String,

    /// Style identifier used as the `speaker` parameter in synthesis calls.
    pub id: i64,
}

/// The style chosen for a speaker name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpeaker {
    /// Speaker display name.
    pub name: String,

    /// Name of the chosen style.
    pub style_name: String,

    /// Identifier of the chosen style.
    pub id: i64,
}
