//! VOICEVOX engine client.

use std::sync::Arc;

use super::{
    error::{Error, Result},
    http::HttpClient,
    speaker::SpeakerService,
    synthesis::SynthesisService,
};

/// Default port of a locally running VOICEVOX engine.
pub const DEFAULT_PORT: u16 = 50021;

/// Default VOICEVOX engine base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:50021";

/// VOICEVOX engine client.
///
/// The client holds nothing but the engine address and an HTTP handle; it is
/// cheap to pass around by reference.
///
/// # Example
///
/// ```rust,ignore
/// use yomiage_voicevox::Client;
///
/// let client = Client::with_port(50021)?;
///
/// let speaker = client.speakers().resolve("ずんだもん").await?;
/// let query = client.synthesis().audio_query("こんにちは", speaker.id).await?;
/// let wav = client.synthesis().synthesize(&query, speaker.id).await?;
/// ```
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for the engine at [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Creates a client for an engine listening on `localhost:<port>`.
    pub fn with_port(port: u16) -> Result<Self> {
        ClientBuilder::new().port(port).build()
    }

    /// Creates a new client builder for more configuration options.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Returns the speaker catalog service.
    pub fn speakers(&self) -> SpeakerService {
        SpeakerService::new(self.http.clone())
    }

    /// Returns the audio query and synthesis service.
    pub fn synthesis(&self) -> SynthesisService {
        SynthesisService::new(self.http.clone())
    }
}

/// Builder for creating a VOICEVOX engine client.
pub struct ClientBuilder {
    base_url: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Sets a custom base URL for the engine.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use yomiage_voicevox::Client;
    ///
    /// let client = Client::builder()
    ///     .base_url("http://192.168.1.20:50021")
    ///     .build()?;
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Points the client at `http://localhost:<port>`.
    pub fn port(mut self, port: u16) -> Self {
        self.base_url = format!("http://localhost:{}", port);
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::Config("base_url must be non-empty".to_string()));
        }

        let http = HttpClient::new(base_url)?;

        Ok(Client {
            http: Arc::new(http),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(DEFAULT_BASE_URL, format!("http://localhost:{}", DEFAULT_PORT));
    }

    #[test]
    fn test_with_port() {
        let client = Client::with_port(50121).unwrap();
        assert_eq!(client.base_url(), "http://localhost:50121");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = Client::builder()
            .base_url("http://127.0.0.1:50021/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:50021");
    }

    #[test]
    fn test_builder_rejects_empty_url() {
        let result = Client::builder().base_url("").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
