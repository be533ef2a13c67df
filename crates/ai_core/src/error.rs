//! Text generation errors

use thiserror::Error;

/// Errors that can occur during text generation
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Invalid or missing configuration (e.g. no API key)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to connect to the generation endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the generation endpoint failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Endpoint returned a non-success status
    #[error("Server error: {0}")]
    ServerError(String),

    /// Response did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during generation
    #[error("Generation request timed out")]
    Timeout,
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
