//! Speech port - Interface for transcription and synthesis

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Audio uploaded by a client, as raw bytes plus the declared MIME type
#[derive(Debug, Clone)]
pub struct AudioUpload {
    /// Raw audio bytes
    pub data: Vec<u8>,
    /// MIME type as declared by the client (e.g. "audio/webm")
    pub mime_type: String,
}

impl AudioUpload {
    /// Create a new upload
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }
}

/// Port for speech processing
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Transcribe uploaded audio to text
    ///
    /// `language` is an optional ISO 639-1 hint for the recognizer.
    async fn transcribe<'a>(
        &self,
        audio: AudioUpload,
        language: Option<&'a str>,
    ) -> Result<String, ApplicationError>;

    /// Synthesize speech from text, returning MP3 bytes
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ApplicationError>;
}
