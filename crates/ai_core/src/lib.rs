//! AI Core - Text generation client
//!
//! Provides the chat-completion abstraction the analysis and scenario
//! services run on, with an OpenAI-compatible HTTP client implementation.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::GenerationConfig;
pub use error::GenerationError;
pub use openai::OpenAiClient;
pub use ports::{ChatCompletion, CompletionRequest, CompletionResponse};
