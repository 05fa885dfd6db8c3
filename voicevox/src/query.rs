//! Audio query types and voice parameter overrides.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel for phoneme lengths meaning "keep the engine's value".
pub const PHONEME_LENGTH_UNSET: f64 = -1.0;

/// The engine's plan for speaking a text.
///
/// `accent_phrases` and any field this type does not name are kept as raw
/// JSON so that a query can be sent back to `/synthesis` unchanged apart from
/// the scalar controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioQuery {
    /// Engine-defined phrase and accent breakdown.
    pub accent_phrases: Vec<Value>,

    #[serde(rename = "speedScale")]
    pub speed_scale: f64,

    #[serde(rename = "pitchScale")]
    pub pitch_scale: f64,

    #[serde(rename = "intonationScale")]
    pub intonation_scale: f64,

    #[serde(rename = "volumeScale")]
    pub volume_scale: f64,

    /// Silence before the utterance, in seconds.
    #[serde(rename = "prePhonemeLength")]
    pub pre_phoneme_length: f64,

    /// Silence after the utterance, in seconds.
    #[serde(rename = "postPhonemeLength")]
    pub post_phoneme_length: f64,

    #[serde(rename = "outputSamplingRate")]
    pub output_sampling_rate: u32,

    #[serde(rename = "outputStereo")]
    pub output_stereo: bool,

    /// AquesTalk-style reading of the text.
    #[serde(default)]
    pub kana: Option<String>,

    /// Fields added by newer engine versions, passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Voice parameters to write into an [`AudioQuery`] before synthesis.
///
/// The four scales are always written. The phoneme lengths are written only
/// when they differ from [`PHONEME_LENGTH_UNSET`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOverrides {
    pub speed_scale: f64,
    pub pitch_scale: f64,
    pub intonation_scale: f64,
    pub volume_scale: f64,
    pub pre_phoneme_length: f64,
    pub post_phoneme_length: f64,
}

impl Default for QueryOverrides {
    fn default() -> Self {
        Self {
            speed_scale: 1.0,
            pitch_scale: 0.0,
            intonation_scale: 1.0,
            volume_scale: 1.0,
            pre_phoneme_length: PHONEME_LENGTH_UNSET,
            post_phoneme_length: PHONEME_LENGTH_UNSET,
        }
    }
}

impl QueryOverrides {
    /// Writes the overrides into `query`.
    pub fn apply(&self, query: &mut AudioQuery) {
        query.speed_scale = self.speed_scale;
        query.pitch_scale = self.pitch_scale;
        query.intonation_scale = self.intonation_scale;
        query.volume_scale = self.volume_scale;

        if self.pre_phoneme_length != PHONEME_LENGTH_UNSET {
            query.pre_phoneme_length = self.pre_phoneme_length;
        }
        if self.post_phoneme_length != PHONEME_LENGTH_UNSET {
            query.post_phoneme_length = self.post_phoneme_length;
        }
    }
}
