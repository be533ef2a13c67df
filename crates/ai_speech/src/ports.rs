//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioData, Transcription};

/// Port for Speech-to-Text (STT) implementations
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails or yields no text.
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError>;

    /// Transcribe audio with a specific language hint
    ///
    /// `language` is an ISO 639-1 code (e.g. "en", "es").
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails or yields no text.
    async fn transcribe_with_language(
        &self,
        audio: AudioData,
        language: &str,
    ) -> Result<Transcription, SpeechError>;
}

/// Port for Text-to-Speech (TTS) implementations
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// `language` is an optional pronunciation hint; the multilingual
    /// model auto-detects, so implementations may ignore it.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(
        &self,
        text: &str,
        language: Option<&str>,
    ) -> Result<AudioData, SpeechError>;

    /// Get the default voice identifier
    fn default_voice(&self) -> &str;
}
