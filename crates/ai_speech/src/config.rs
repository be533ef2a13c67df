//! Configuration for speech processing

use serde::{Deserialize, Serialize};

/// Configuration for the speech provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// API key; absent means speech features are unconfigured
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the speech API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Voice used for synthesis
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// Model identifier sent with STT and TTS requests
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Voice stability setting (0.0 - 1.0)
    #[serde(default = "default_stability")]
    pub stability: f32,

    /// Voice similarity boost setting (0.0 - 1.0)
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f32,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum accepted audio upload size in bytes
    #[serde(default = "default_max_audio_bytes")]
    pub max_audio_bytes: usize,
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io/v1".to_string()
}

fn default_voice_id() -> String {
    // Rachel, the stock multilingual voice
    "21m00Tcm4TlvDq8ikWAM".to_string()
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

const fn default_stability() -> f32 {
    0.5
}

const fn default_similarity_boost() -> f32 {
    0.75
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds; audio processing is slow
}

const fn default_max_audio_bytes() -> usize {
    25 * 1024 * 1024 // 25MB
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            voice_id: default_voice_id(),
            model_id: default_model_id(),
            stability: default_stability(),
            similarity_boost: default_similarity_boost(),
            timeout_ms: default_timeout_ms(),
            max_audio_bytes: default_max_audio_bytes(),
        }
    }
}

impl SpeechConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    ///
    /// The API key is deliberately not checked here: an absent key is a
    /// valid (if unconfigured) state, surfaced per request instead of at
    /// startup.
    pub fn validate(&self) -> Result<(), String> {
        if self.voice_id.is_empty() {
            return Err("Voice ID must not be empty".to_string());
        }

        if !(0.0..=1.0).contains(&self.stability) {
            return Err(format!(
                "Stability must be between 0.0 and 1.0, got {}",
                self.stability
            ));
        }

        if !(0.0..=1.0).contains(&self.similarity_boost) {
            return Err(format!(
                "Similarity boost must be between 0.0 and 1.0, got {}",
                self.similarity_boost
            ));
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.max_audio_bytes == 0 {
            return Err("Max audio size must be greater than 0".to_string());
        }

        Ok(())
    }
}
