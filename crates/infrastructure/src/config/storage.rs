//! Storage path configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File-storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the notebook JSON document
    #[serde(default = "default_notes_file")]
    pub notes_file: PathBuf,

    /// Directory synthesized audio files are written to
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    /// Public URL prefix audio files are served under
    #[serde(default = "default_audio_public_prefix")]
    pub audio_public_prefix: String,
}

fn default_notes_file() -> PathBuf {
    PathBuf::from("storage/notes.json")
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("static/audio")
}

fn default_audio_public_prefix() -> String {
    "/static/audio".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            notes_file: default_notes_file(),
            audio_dir: default_audio_dir(),
            audio_public_prefix: default_audio_public_prefix(),
        }
    }
}
