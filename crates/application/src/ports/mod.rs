//! Port definitions - Interfaces to the outside world
//!
//! Ports are the boundaries of the application layer. Adapters in the
//! infrastructure crate implement them against real services; tests use
//! mocks or the in-memory fakes.

pub mod audio_store;
pub mod generation_port;
pub mod notebook_store;
pub mod speech_port;

pub use audio_store::AudioStore;
pub use generation_port::{GenerationPort, GenerationRequest};
pub use notebook_store::{InMemoryNotebookStore, NotebookStore};
pub use speech_port::{AudioUpload, SpeechPort};
