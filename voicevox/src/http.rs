//! HTTP client implementation for the VOICEVOX engine.

use bytes::Bytes;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client as ReqwestClient, RequestBuilder, Response,
};
use serde::{de::DeserializeOwned, Serialize};

use super::error::{Error, Result};

/// HTTP client for the VOICEVOX engine.
///
/// Every call is a single attempt. No timeout is set beyond reqwest's defaults.
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(base_url: String) -> Result<Self> {
        let client = ReqwestClient::builder()
            .default_headers(default_headers())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET request and decodes the JSON response.
    pub async fn get_json<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let body = self.send(self.client.get(&url), &url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Performs a POST request with query parameters and no body, and decodes
    /// the JSON response.
    pub async fn post_json<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let body = self
            .send(self.client.post(&url).query(query), &url)
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Performs a POST request with query parameters and a JSON body, and
    /// returns the raw response body.
    pub async fn post_bytes<Q, T>(&self, path: &str, query: &Q, body: &T) -> Result<Bytes>
    where
        Q: Serialize + ?Sized,
        T: Serialize + ?Sized,
    {
        let url = self.url(path);
        let payload = serde_json::to_vec(body)?;
        let request = self
            .client
            .post(&url)
            .query(query)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        self.send(request, &url).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and returns the body of a successful response.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Bytes> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                Error::Connection {
                    url: url.to_string(),
                    source: e,
                }
            } else {
                Error::Http(e)
            }
        })?;

        tracing::debug!(url, status = response.status().as_u16(), "engine response");
        handle_response(response).await
    }
}

/// Returns default headers for engine requests.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(USER_AGENT, HeaderValue::from_static("yomiage-voicevox-rust/1.0"));
    headers
}

/// Reads the whole body, turning a non-success status into an API error that
/// carries the raw body text.
async fn handle_response(response: Response) -> Result<Bytes> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(Error::api(
            status.as_u16(),
            String::from_utf8_lossy(&body).to_string(),
        ));
    }

    Ok(body)
}
