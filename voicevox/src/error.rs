//! Error types for the VOICEVOX engine client.

use thiserror::Error;

/// Result type alias for VOICEVOX operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for VOICEVOX engine operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The engine could not be reached.
    #[error(
        "could not connect to the VOICEVOX engine at {url}: {source}\n\
         make sure the engine is running and the port number is correct"
    )]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The engine answered with a non-success HTTP status.
    #[error("voicevox: engine returned HTTP {status}\ndetails: {body}")]
    Api { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("failed to decode engine response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No speaker with the requested name, or the speaker has no styles.
    #[error("speaker '{0}' was not found")]
    SpeakerNotFound(String),

    /// HTTP transport error other than a failed connect.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new API error.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Error::Api {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the engine was unreachable.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// Returns true if the requested speaker does not exist.
    pub fn is_speaker_not_found(&self) -> bool {
        matches!(self, Error::SpeakerNotFound(_))
    }

    /// Returns true if this is a server-side error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let err = Error::api(422, r#"{"detail":"bad speaker"}"#);
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_server_error());
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("bad speaker"));

        assert!(Error::api(500, "").is_server_error());
    }

    #[test]
    fn test_speaker_not_found() {
        let err = Error::SpeakerNotFound("四国めたん".to_string());
        assert!(err.is_speaker_not_found());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "speaker '四国めたん' was not found");
    }
}
