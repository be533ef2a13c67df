//! Adapter from the application speech port to the speech provider

use std::sync::Arc;

use async_trait::async_trait;

use ai_speech::{AudioData, AudioFormat, SpeechError, SpeechToText, TextToSpeech};
use application::ApplicationError;
use application::ports::{AudioUpload, SpeechPort};
use domain::DomainError;

/// Bridges `SpeechPort` to the STT and TTS provider traits
pub struct SpeechAdapter<P>
where
    P: SpeechToText + TextToSpeech,
{
    provider: Arc<P>,
}

impl<P> SpeechAdapter<P>
where
    P: SpeechToText + TextToSpeech,
{
    /// Create a new adapter over a speech provider
    pub const fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> SpeechPort for SpeechAdapter<P>
where
    P: SpeechToText + TextToSpeech,
{
    async fn transcribe<'a>(
        &self,
        audio: AudioUpload,
        language: Option<&'a str>,
    ) -> Result<String, ApplicationError> {
        // Browser recordings are webm unless the MIME type says otherwise
        let format = AudioFormat::from_mime_type(&audio.mime_type).unwrap_or(AudioFormat::Webm);
        let audio = AudioData::new(audio.data, format);

        let transcription = match language {
            Some(code) => self.provider.transcribe_with_language(audio, code).await,
            None => self.provider.transcribe(audio).await,
        }
        .map_err(map_speech_error)?;

        Ok(transcription.text)
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ApplicationError> {
        let audio = self
            .provider
            .synthesize(text, None)
            .await
            .map_err(map_speech_error)?;

        Ok(audio.into_data())
    }
}

fn map_speech_error(err: SpeechError) -> ApplicationError {
    match err {
        SpeechError::Configuration(msg) => ApplicationError::Configuration(msg),
        SpeechError::InvalidAudio(msg) => DomainError::ValidationError(msg).into(),
        SpeechError::AudioTooLarge { .. } => {
            DomainError::ValidationError(err.to_string()).into()
        },
        SpeechError::EmptyTranscript => {
            DomainError::ValidationError("No speech detected in the audio".to_string()).into()
        },
        SpeechError::InvalidResponse(msg) => ApplicationError::Parse(msg),
        SpeechError::ConnectionFailed(_)
        | SpeechError::RequestFailed(_)
        | SpeechError::TranscriptionFailed(_)
        | SpeechError::SynthesisFailed(_)
        | SpeechError::Timeout => ApplicationError::Upstream(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_speech::Transcription;

    struct StubProvider {
        stt: Result<String, fn() -> SpeechError>,
    }

    #[async_trait]
    impl SpeechToText for StubProvider {
        async fn transcribe(&self, _audio: AudioData) -> Result<Transcription, SpeechError> {
            match &self.stt {
                Ok(text) => Ok(Transcription::new(text.clone())),
                Err(make) => Err(make()),
            }
        }

        async fn transcribe_with_language(
            &self,
            audio: AudioData,
            language: &str,
        ) -> Result<Transcription, SpeechError> {
            self.transcribe(audio)
                .await
                .map(|t| t.with_language(language))
        }
    }

    #[async_trait]
    impl TextToSpeech for StubProvider {
        async fn synthesize(
            &self,
            _text: &str,
            _language: Option<&str>,
        ) -> Result<AudioData, SpeechError> {
            Ok(AudioData::new(vec![0xFF, 0xFB], AudioFormat::Mp3))
        }

        fn default_voice(&self) -> &str {
            "stub"
        }
    }

    #[tokio::test]
    async fn transcribe_passes_language_hint() {
        let adapter = SpeechAdapter::new(Arc::new(StubProvider {
            stt: Ok("hallo welt".to_string()),
        }));

        let upload = AudioUpload::new(vec![1, 2, 3], "audio/webm");
        let text = adapter.transcribe(upload, Some("de")).await.unwrap();

        assert_eq!(text, "hallo welt");
    }

    #[tokio::test]
    async fn empty_transcript_maps_to_validation_error() {
        let adapter = SpeechAdapter::new(Arc::new(StubProvider {
            stt: Err(|| SpeechError::EmptyTranscript),
        }));

        let upload = AudioUpload::new(vec![1, 2, 3], "audio/webm");
        let result = adapter.transcribe(upload, None).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::ValidationError(_)))
        ));
    }

    #[tokio::test]
    async fn transcription_failure_maps_to_upstream() {
        let adapter = SpeechAdapter::new(Arc::new(StubProvider {
            stt: Err(|| SpeechError::TranscriptionFailed("Status 500".to_string())),
        }));

        let upload = AudioUpload::new(vec![1, 2, 3], "audio/webm");
        let result = adapter.transcribe(upload, None).await;

        assert!(matches!(result, Err(ApplicationError::Upstream(_))));
    }

    #[tokio::test]
    async fn synthesize_returns_bytes() {
        let adapter = SpeechAdapter::new(Arc::new(StubProvider {
            stt: Ok(String::new()),
        }));

        let bytes = adapter.synthesize("Bonjour").await.unwrap();

        assert_eq!(bytes, vec![0xFF, 0xFB]);
    }
}
