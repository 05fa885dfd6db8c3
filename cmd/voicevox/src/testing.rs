//! In-process mock VOICEVOX engine for pipeline tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

/// A 44-byte WAV header with no samples.
pub const WAV: &[u8] = b"RIFF$\x00\x00\x00WAVEfmt \x10\x00\x00\x00\x01\x00\x01\x00\xc0]\x00\x00\x80\xbb\x00\x00\x02\x00\x10\x00data\x00\x00\x00\x00";

/// What the engine saw.
#[derive(Debug, Clone, Default)]
pub struct Recorded {
    pub requests: usize,
    pub query_text: Option<String>,
    pub query_speaker: Option<String>,
    pub synthesis_speaker: Option<String>,
    pub synthesis_body: Option<Value>,
}

struct EngineState {
    speakers: Value,
    query: Value,
    recorded: Mutex<Recorded>,
}

pub struct MockEngine {
    addr: SocketAddr,
    state: Arc<EngineState>,
}

impl MockEngine {
    /// Starts an engine with a two-speaker catalog.
    pub async fn spawn() -> Self {
        Self::with_speakers(json!([
            {
                "name": "四国めたん",
                "speaker_uuid": "7ffcb7ce-00ec-4bdc-82cd-45a8889e43ff",
                "styles": [{"name": "ノーマル", "id": 2}, {"name": "あまあま", "id": 0}],
                "version": "0.14.4"
            },
            {
                "name": "ずんだもん",
                "speaker_uuid": "388f246b-8c41-4ac1-8e2d-5d79f3ff56d9",
                "styles": [{"name": "ノーマル", "id": 3}, {"name": "あまあま", "id": 1}],
                "version": "0.14.4"
            }
        ]))
        .await
    }

    /// Starts an engine serving the given catalog.
    pub async fn with_speakers(speakers: Value) -> Self {
        let state = Arc::new(EngineState {
            speakers,
            query: json!({
                "accent_phrases": [{
                    "moras": [
                        {"text": "コ", "consonant": "k", "consonant_length": 0.06, "vowel": "o", "vowel_length": 0.08, "pitch": 5.7},
                        {"text": "ン", "consonant": null, "consonant_length": null, "vowel": "N", "vowel_length": 0.06, "pitch": 5.9}
                    ],
                    "accent": 5,
                    "pause_mora": null,
                    "is_interrogative": false
                }],
                "speedScale": 0.9,
                "pitchScale": 0.02,
                "intonationScale": 1.1,
                "volumeScale": 1.2,
                "prePhonemeLength": 0.1,
                "postPhonemeLength": 0.1,
                "outputSamplingRate": 24000,
                "outputStereo": false,
                "kana": "コンニチワ'"
            }),
            recorded: Mutex::new(Recorded::default()),
        });

        let app = Router::new()
            .route("/speakers", get(self::speakers))
            .route("/audio_query", post(audio_query))
            .route("/synthesis", post(synthesis))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The query the engine returns from /audio_query.
    pub fn query(&self) -> &Value {
        &self.state.query
    }

    pub fn recorded(&self) -> Recorded {
        self.state.recorded.lock().unwrap().clone()
    }
}

/// Returns a base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn speakers(State(state): State<Arc<EngineState>>) -> Response {
    state.recorded.lock().unwrap().requests += 1;
    Json(state.speakers.clone()).into_response()
}

async fn audio_query(
    State(state): State<Arc<EngineState>>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Response {
    {
        let mut recorded = state.recorded.lock().unwrap();
        recorded.requests += 1;
        recorded.query_text = params.remove("text");
        recorded.query_speaker = params.remove("speaker");
    }
    Json(state.query.clone()).into_response()
}

async fn synthesis(
    State(state): State<Arc<EngineState>>,
    Query(mut params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    {
        let mut recorded = state.recorded.lock().unwrap();
        recorded.requests += 1;
        recorded.synthesis_speaker = params.remove("speaker");
        recorded.synthesis_body = serde_json::from_slice(&body).ok();
    }
    ([(CONTENT_TYPE, "audio/wav")], WAV.to_vec()).into_response()
}
