//! Infrastructure layer - Configuration, persistence, and port adapters
//!
//! Implements the application crate's ports against concrete backends:
//! the JSON-file notebook store, the filesystem audio store, and the
//! adapters bridging to the `ai_core` and `ai_speech` clients.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::{FsAudioStore, GenerationAdapter, SpeechAdapter};
pub use config::{AppConfig, ServerConfig, StorageConfig};
pub use persistence::JsonNotebookStore;
