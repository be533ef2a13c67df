//! ElevenLabs speech provider
//!
//! Implements STT against the ElevenLabs speech-to-text endpoint and TTS
//! against the text-to-speech endpoint, both using the multilingual model
//! so one provider covers every practice language.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::{SpeechToText, TextToSpeech};
use crate::types::{AudioData, AudioFormat, Transcription};

const API_KEY_HEADER: &str = "xi-api-key";

/// ElevenLabs STT/TTS adapter
pub struct ElevenLabsProvider {
    client: Client,
    config: SpeechConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
    #[serde(default)]
    language_code: Option<String>,
}

impl ElevenLabsProvider {
    /// Create a new provider from configuration
    ///
    /// Construction succeeds without an API key; requests made through an
    /// unconfigured provider fail with a `Configuration` error instead.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the config is invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SpeechError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> Result<&str, SpeechError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SpeechError::Configuration("Speech API key is not configured".into()))
    }

    fn check_audio(&self, audio: &AudioData) -> Result<(), SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio payload is empty".into()));
        }

        if audio.size_bytes() > self.config.max_audio_bytes {
            return Err(SpeechError::AudioTooLarge {
                size_bytes: audio.size_bytes(),
                max_bytes: self.config.max_audio_bytes,
            });
        }

        Ok(())
    }

    async fn transcribe_inner(
        &self,
        audio: AudioData,
        language: Option<&str>,
    ) -> Result<Transcription, SpeechError> {
        self.check_audio(&audio)?;
        let api_key = self.api_key()?.to_string();

        let url = format!("{}/speech-to-text", self.config.base_url);
        let size = audio.size_bytes();
        let filename = audio.filename("recording");
        let mime = audio.mime_type();

        let part = Part::bytes(audio.into_data())
            .file_name(filename)
            .mime_str(mime)
            .map_err(|e| SpeechError::InvalidAudio(e.to_string()))?;

        let mut form = Form::new()
            .part("audio", part)
            .text("model_id", self.config.model_id.clone());

        if let Some(code) = language {
            form = form.text("language_code", code.to_string());
        }

        debug!(size_bytes = size, "Sending audio for transcription");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Transcription request failed");
            return Err(SpeechError::TranscriptionFailed(format!("Status {status}")));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let text = parsed.text.trim();
        if text.is_empty() {
            return Err(SpeechError::EmptyTranscript);
        }

        let mut transcription = Transcription::new(text);
        if let Some(code) = language.map(str::to_string).or(parsed.language_code) {
            transcription = transcription.with_language(code);
        }

        Ok(transcription)
    }
}

#[async_trait]
impl SpeechToText for ElevenLabsProvider {
    #[instrument(skip(self, audio), fields(size_bytes = audio.size_bytes()))]
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError> {
        self.transcribe_inner(audio, None).await
    }

    #[instrument(skip(self, audio), fields(size_bytes = audio.size_bytes(), language = %language))]
    async fn transcribe_with_language(
        &self,
        audio: AudioData,
        language: &str,
    ) -> Result<Transcription, SpeechError> {
        self.transcribe_inner(audio, Some(language)).await
    }
}

#[async_trait]
impl TextToSpeech for ElevenLabsProvider {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(
        &self,
        text: &str,
        _language: Option<&str>,
    ) -> Result<AudioData, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed("Text is empty".into()));
        }

        let api_key = self.api_key()?.to_string();
        let url = format!(
            "{}/text-to-speech/{}",
            self.config.base_url, self.config.voice_id
        );

        let request = SynthesisRequest {
            text,
            model_id: &self.config.model_id,
            voice_settings: VoiceSettings {
                stability: self.config.stability,
                similarity_boost: self.config.similarity_boost,
            },
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Synthesis request failed");
            return Err(SpeechError::SynthesisFailed(format!("Status {status}")));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Synthesis returned no audio".into(),
            ));
        }

        debug!(size_bytes = bytes.len(), "Received synthesized audio");

        Ok(AudioData::new(bytes.to_vec(), AudioFormat::Mp3))
    }

    fn default_voice(&self) -> &str {
        &self.config.voice_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> SpeechConfig {
        SpeechConfig {
            api_key: Some("test-key".to_string()),
            base_url,
            ..Default::default()
        }
    }

    fn sample_audio() -> AudioData {
        AudioData::new(vec![0u8; 128], AudioFormat::Webm)
    }

    #[tokio::test]
    async fn transcribe_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/speech-to-text"))
            .and(header("xi-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "text": "Hola, ¿cómo estás?"
            })))
            .mount(&server)
            .await;

        let provider = ElevenLabsProvider::new(test_config(server.uri())).unwrap();
        let result = provider.transcribe(sample_audio()).await.unwrap();

        assert_eq!(result.text, "Hola, ¿cómo estás?");
        assert!(result.language.is_none());
    }

    #[tokio::test]
    async fn transcribe_with_language_hint() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/speech-to-text"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "text": "Guten Tag"
            })))
            .mount(&server)
            .await;

        let provider = ElevenLabsProvider::new(test_config(server.uri())).unwrap();
        let result = provider
            .transcribe_with_language(sample_audio(), "de")
            .await
            .unwrap();

        assert_eq!(result.language, Some("de".to_string()));
    }

    #[tokio::test]
    async fn transcribe_blank_text_is_empty_transcript() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/speech-to-text"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "text": "   "
            })))
            .mount(&server)
            .await;

        let provider = ElevenLabsProvider::new(test_config(server.uri())).unwrap();
        let result = provider.transcribe(sample_audio()).await;

        assert!(matches!(result, Err(SpeechError::EmptyTranscript)));
    }

    #[tokio::test]
    async fn transcribe_rejects_empty_audio() {
        let provider =
            ElevenLabsProvider::new(test_config("http://localhost:1".to_string())).unwrap();

        let result = provider
            .transcribe(AudioData::new(vec![], AudioFormat::Webm))
            .await;

        assert!(matches!(result, Err(SpeechError::InvalidAudio(_))));
    }

    #[tokio::test]
    async fn transcribe_rejects_oversized_audio() {
        let mut config = test_config("http://localhost:1".to_string());
        config.max_audio_bytes = 16;
        let provider = ElevenLabsProvider::new(config).unwrap();

        let result = provider.transcribe(sample_audio()).await;

        assert!(matches!(
            result,
            Err(SpeechError::AudioTooLarge {
                size_bytes: 128,
                max_bytes: 16
            })
        ));
    }

    #[tokio::test]
    async fn transcribe_upstream_error_does_not_leak_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/speech-to-text"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string("secret internal diagnostics"),
            )
            .mount(&server)
            .await;

        let provider = ElevenLabsProvider::new(test_config(server.uri())).unwrap();
        let err = provider.transcribe(sample_audio()).await.unwrap_err();

        assert!(!err.to_string().contains("secret internal diagnostics"));
    }

    #[tokio::test]
    async fn synthesize_success() {
        let server = MockServer::start().await;
        let mp3_bytes = vec![0xFF, 0xFB, 0x90, 0x64];

        Mock::given(method("POST"))
            .and(path("/text-to-speech/21m00Tcm4TlvDq8ikWAM"))
            .and(header("xi-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(mp3_bytes.clone()))
            .mount(&server)
            .await;

        let provider = ElevenLabsProvider::new(test_config(server.uri())).unwrap();
        let audio = provider.synthesize("Bonjour", None).await.unwrap();

        assert_eq!(audio.format(), AudioFormat::Mp3);
        assert_eq!(audio.into_data(), mp3_bytes);
    }

    #[tokio::test]
    async fn synthesize_rejects_empty_text() {
        let provider =
            ElevenLabsProvider::new(test_config("http://localhost:1".to_string())).unwrap();

        let result = provider.synthesize("  ", None).await;

        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
    }

    #[tokio::test]
    async fn synthesize_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text-to-speech/21m00Tcm4TlvDq8ikWAM"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let provider = ElevenLabsProvider::new(test_config(server.uri())).unwrap();
        let result = provider.synthesize("Hello", None).await;

        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
    }

    #[test]
    fn new_succeeds_without_api_key() {
        assert!(ElevenLabsProvider::new(SpeechConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn transcribe_without_api_key_is_configuration_error() {
        let provider = ElevenLabsProvider::new(SpeechConfig::default()).unwrap();

        let result = provider.transcribe(sample_audio()).await;

        assert!(matches!(result, Err(SpeechError::Configuration(_))));
    }

    #[tokio::test]
    async fn synthesize_without_api_key_is_configuration_error() {
        let provider = ElevenLabsProvider::new(SpeechConfig::default()).unwrap();

        let result = provider.synthesize("Hello", None).await;

        assert!(matches!(result, Err(SpeechError::Configuration(_))));
    }
}
