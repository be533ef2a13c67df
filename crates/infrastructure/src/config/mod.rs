//! Application configuration
//!
//! Layered loading: built-in defaults, then an optional `config.toml`,
//! then `LINGUALOG_*` environment variables, and finally the well-known
//! provider secret variables (`OPENAI_API_KEY`, `ELEVENLABS_API_KEY`,
//! ...) which only fill fields the earlier layers left empty.

mod server;
mod storage;

use ai_core::GenerationConfig;
use ai_speech::SpeechConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Notebook and audio file paths
    #[serde(default)]
    pub storage: StorageConfig,

    /// LLM generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Speech (STT/TTS) settings
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file, and environment
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` when the file or environment values
    /// cannot be deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("LINGUALOG")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut app_config: Self = builder.build()?.try_deserialize()?;
        app_config.overlay_secrets(|name| std::env::var(name).ok());
        Ok(app_config)
    }

    /// Fill empty secret fields from the conventional provider variables
    ///
    /// Values already set by file or `LINGUALOG_*` variables win; the
    /// overlay never overrides them.
    pub fn overlay_secrets<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        overlay(&mut self.generation.api_key, "OPENAI_API_KEY", &get);
        overlay_value(&mut self.generation.model, "OPENAI_MODEL", &get);
        overlay(&mut self.speech.api_key, "ELEVENLABS_API_KEY", &get);
        overlay_value(&mut self.speech.voice_id, "ELEVENLABS_VOICE_ID", &get);
    }

    /// Validate all sections, returning the first problem found
    ///
    /// # Errors
    ///
    /// Returns a message naming the invalid section and field.
    pub fn validate(&self) -> Result<(), String> {
        self.generation
            .validate()
            .map_err(|e| format!("generation: {e}"))?;
        self.speech.validate().map_err(|e| format!("speech: {e}"))?;
        Ok(())
    }
}

fn overlay<F>(field: &mut Option<String>, name: &str, get: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if field.as_deref().is_none_or(str::is_empty) {
        if let Some(value) = get(name).filter(|v| !v.is_empty()) {
            debug!(variable = name, "Loaded secret from environment");
            *field = Some(value);
        }
    }
}

fn overlay_value<F>(field: &mut String, name: &str, get: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = get(name).filter(|v| !v.is_empty()) {
        *field = value;
    }
}
