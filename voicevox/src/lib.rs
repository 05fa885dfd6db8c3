//! VOICEVOX engine client for Rust.
//!
//! This crate talks to a locally running VOICEVOX engine over HTTP: it lists
//! speakers, builds audio queries and renders them to audio.

mod client;
mod error;
mod http;
mod query;
mod speaker;
mod synthesis;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_PORT};
pub use error::{Error, Result};
pub use query::{AudioQuery, QueryOverrides, PHONEME_LENGTH_UNSET};
pub use speaker::{find_speaker, ResolvedSpeaker, Speaker, SpeakerService, SpeakerStyle};
pub use synthesis::SynthesisService;
