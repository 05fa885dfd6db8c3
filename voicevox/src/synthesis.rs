//! Audio query and synthesis service.

use std::sync::Arc;

use bytes::Bytes;

use super::{error::Result, http::HttpClient, query::AudioQuery};

/// Audio query and synthesis service.
pub struct SynthesisService {
    http: Arc<HttpClient>,
}

impl SynthesisService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Asks the engine how `text` should be spoken by the given style.
    ///
    /// Text and speaker travel as query parameters; the request has no body.
    pub async fn audio_query(&self, text: &str, speaker_id: i64) -> Result<AudioQuery> {
        let speaker = speaker_id.to_string();
        self.http
            .post_json("/audio_query", &[("text", text), ("speaker", speaker.as_str())])
            .await
    }

    /// Renders a query to audio and returns the encoded bytes (WAV).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = client.synthesis().audio_query("こんにちは", 3).await?;
    /// query.speed_scale = 1.2;
    ///
    /// let wav = client.synthesis().synthesize(&query, 3).await?;
    /// std::fs::write("hello.wav", &wav)?;
    /// ```
    pub async fn synthesize(&self, query: &AudioQuery, speaker_id: i64) -> Result<Bytes> {
        self.http
            .post_bytes("/synthesis", &[("speaker", speaker_id)], query)
            .await
    }
}
