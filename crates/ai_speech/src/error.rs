//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech processing
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to connect to speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to speech service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Invalid audio data
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// Audio payload too large for the service
    #[error("Audio too large: {size_bytes} bytes exceeds maximum of {max_bytes} bytes")]
    AudioTooLarge {
        /// Size of the provided audio
        size_bytes: usize,
        /// Maximum allowed size
        max_bytes: usize,
    },

    /// Transcription failed
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Transcription produced no usable text
    #[error("Transcription returned no text")]
    EmptyTranscript,

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid response from service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during processing
    #[error("Speech request timed out")]
    Timeout,
}

impl From<reqwest::Error> for SpeechError {
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
