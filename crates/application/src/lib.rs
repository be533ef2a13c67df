//! Application layer - Use cases and orchestration
//!
//! Coordinates the practice pipeline over the domain model:
//! transcription, analysis, notebook persistence, and speech synthesis.
//! Depends only on the domain crate and its own port definitions;
//! adapters live in the infrastructure crate.

pub mod error;
pub mod ports;
pub mod prompts;
pub mod services;

pub use error::ApplicationError;
pub use ports::{
    AudioStore, AudioUpload, GenerationPort, GenerationRequest, InMemoryNotebookStore,
    NotebookStore, SpeechPort,
};
pub use services::{
    Analysis, AnalysisService, PracticeOutcome, PracticeService, PracticeSubmission,
    ScenarioService,
};
