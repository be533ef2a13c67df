//! Practice service - the transcribe, analyze, persist, synthesize pipeline

use std::sync::Arc;

use domain::NotebookEntry;
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{AudioStore, AudioUpload, NotebookStore, SpeechPort};
use crate::services::AnalysisService;

/// A text submission with its practice metadata
#[derive(Debug, Clone)]
pub struct PracticeSubmission {
    /// Text to analyze
    pub text: String,
    /// Optional practice topic
    pub topic: Option<String>,
    /// Language being practiced
    pub practice_language: String,
    /// Learner's native language, used for explanations
    pub native_language: String,
}

impl PracticeSubmission {
    /// Create a submission with default languages ("en")
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            topic: None,
            practice_language: "en".to_string(),
            native_language: "en".to_string(),
        }
    }

    /// Set the practice topic
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Set the practice and native languages
    #[must_use]
    pub fn with_languages(
        mut self,
        practice_language: impl Into<String>,
        native_language: impl Into<String>,
    ) -> Self {
        self.practice_language = practice_language.into();
        self.native_language = native_language.into();
        self
    }
}

/// Result of a practice submission
#[derive(Debug, Clone)]
pub struct PracticeOutcome {
    /// The persisted notebook entry
    pub entry: NotebookEntry,
    /// Public path to synthesized audio of the improved text, when
    /// synthesis succeeded
    pub audio_url: Option<String>,
}

/// Service orchestrating the full practice pipeline
pub struct PracticeService {
    analysis: AnalysisService,
    speech: Arc<dyn SpeechPort>,
    store: Arc<dyn NotebookStore>,
    audio_store: Arc<dyn AudioStore>,
}

impl PracticeService {
    /// Create a new practice service
    pub fn new(
        analysis: AnalysisService,
        speech: Arc<dyn SpeechPort>,
        store: Arc<dyn NotebookStore>,
        audio_store: Arc<dyn AudioStore>,
    ) -> Self {
        Self {
            analysis,
            speech,
            store,
            audio_store,
        }
    }

    /// Analyze a text submission and persist the resulting entry
    ///
    /// Audio synthesis of the improved text is best-effort; the entry is
    /// persisted and returned even when synthesis fails.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty text, and analysis or storage
    /// errors from the pipeline.
    #[instrument(skip(self, submission), fields(text_len = submission.text.len()))]
    pub async fn submit_text(
        &self,
        submission: PracticeSubmission,
    ) -> Result<PracticeOutcome, ApplicationError> {
        let analysis = self
            .analysis
            .analyze(
                &submission.text,
                &submission.practice_language,
                &submission.native_language,
            )
            .await?;

        let mut entry = NotebookEntry::new(
            self.store.new_id(),
            submission.text.trim(),
            analysis.improved_text,
            analysis.errors,
            analysis.difficult_words,
        )
        .with_languages(&submission.practice_language, &submission.native_language);

        if let Some(topic) = submission.topic {
            entry = entry.with_topic(topic);
        }

        let entry = self.store.append(entry).await?;
        info!(entry_id = %entry.id, "Persisted notebook entry");

        let audio_url = self
            .narrate(&entry.improved_text, &entry.practice_language)
            .await;

        Ok(PracticeOutcome { entry, audio_url })
    }

    /// Transcribe uploaded audio, then run the text submission pipeline
    ///
    /// The practice language is passed to the recognizer as a hint. The
    /// transcription becomes the entry's original text.
    ///
    /// # Errors
    ///
    /// Returns transcription failures in addition to everything
    /// `submit_text` can return.
    #[instrument(skip(self, audio, submission), fields(size_bytes = audio.data.len()))]
    pub async fn submit_audio(
        &self,
        audio: AudioUpload,
        submission: PracticeSubmission,
    ) -> Result<PracticeOutcome, ApplicationError> {
        let text = self
            .speech
            .transcribe(audio, Some(&submission.practice_language))
            .await?;

        self.submit_text(PracticeSubmission {
            text,
            ..submission
        })
        .await
    }

    /// Transcribe uploaded audio without persisting anything
    ///
    /// # Errors
    ///
    /// Returns transcription failures from the speech port.
    pub async fn transcribe(
        &self,
        audio: AudioUpload,
        language: Option<&str>,
    ) -> Result<String, ApplicationError> {
        self.speech.transcribe(audio, language).await
    }

    /// Synthesize speech for the text and store it, returning the public
    /// audio path, or `None` on any failure
    ///
    /// The language parameter is a pronunciation hint only; the
    /// multilingual voice auto-detects.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn narrate(&self, text: &str, _language: &str) -> Option<String> {
        let bytes = match self.speech.synthesize(text).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Speech synthesis failed");
                return None;
            },
        };

        match self.audio_store.save(bytes, "mp3").await {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(error = %e, "Failed to store synthesized audio");
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::audio_store::MockAudioStore;
    use crate::ports::generation_port::MockGenerationPort;
    use crate::ports::notebook_store::InMemoryNotebookStore;
    use crate::ports::speech_port::MockSpeechPort;

    const ANALYSIS_REPLY: &str = r#"{
        "improved_text": "I have a cat",
        "errors": [{"original": "has", "corrected": "have", "explanation": "use have"}],
        "difficult_words": []
    }"#;

    struct Fixture {
        generation: MockGenerationPort,
        speech: MockSpeechPort,
        audio_store: MockAudioStore,
        store: Arc<InMemoryNotebookStore>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                generation: MockGenerationPort::new(),
                speech: MockSpeechPort::new(),
                audio_store: MockAudioStore::new(),
                store: Arc::new(InMemoryNotebookStore::new()),
            }
        }

        fn build(self) -> PracticeService {
            PracticeService::new(
                AnalysisService::new(Arc::new(self.generation)),
                Arc::new(self.speech),
                self.store,
                Arc::new(self.audio_store),
            )
        }
    }

    #[tokio::test]
    async fn submit_text_persists_entry_with_audio() {
        let mut fixture = Fixture::new();
        fixture
            .generation
            .expect_generate()
            .returning(|_| Ok(ANALYSIS_REPLY.to_string()));
        fixture
            .speech
            .expect_synthesize()
            .returning(|_| Ok(vec![0xFF, 0xFB]));
        fixture
            .audio_store
            .expect_save()
            .returning(|_, _| Ok("/static/audio/abc.mp3".to_string()));
        let store = Arc::clone(&fixture.store);
        let service = fixture.build();

        let submission = PracticeSubmission::new("I has a cat")
            .with_topic("pets")
            .with_languages("en", "zh");
        let outcome = service.submit_text(submission).await.unwrap();

        assert_eq!(outcome.entry.original_text, "I has a cat");
        assert_eq!(outcome.entry.improved_text, "I have a cat");
        assert_eq!(outcome.entry.topic, Some("pets".to_string()));
        assert_eq!(outcome.entry.native_language, "zh");
        assert_eq!(outcome.audio_url, Some("/static/audio/abc.mp3".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn submit_text_succeeds_without_audio() {
        let mut fixture = Fixture::new();
        fixture
            .generation
            .expect_generate()
            .returning(|_| Ok(ANALYSIS_REPLY.to_string()));
        fixture
            .speech
            .expect_synthesize()
            .returning(|_| Err(ApplicationError::Upstream("Status 500".to_string())));
        let store = Arc::clone(&fixture.store);
        let service = fixture.build();

        let outcome = service
            .submit_text(PracticeSubmission::new("I has a cat"))
            .await
            .unwrap();

        assert!(outcome.audio_url.is_none());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn submit_text_rejects_empty_text_without_persisting() {
        let fixture = Fixture::new();
        let store = Arc::clone(&fixture.store);
        let service = fixture.build();

        let result = service
            .submit_text(PracticeSubmission::new("   "))
            .await;

        assert!(matches!(result, Err(ApplicationError::Domain(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn submit_audio_transcribes_then_analyzes() {
        let mut fixture = Fixture::new();
        fixture
            .speech
            .expect_transcribe()
            .withf(|_, language| *language == Some("es"))
            .returning(|_, _| Ok("Yo tiene un gato".to_string()));
        fixture.generation.expect_generate().returning(|_| {
            Ok(r#"{"improved_text": "Yo tengo un gato", "errors": [], "difficult_words": []}"#
                .to_string())
        });
        fixture
            .speech
            .expect_synthesize()
            .returning(|_| Ok(vec![1]));
        fixture
            .audio_store
            .expect_save()
            .returning(|_, _| Ok("/static/audio/x.mp3".to_string()));
        let service = fixture.build();

        let audio = AudioUpload::new(vec![1, 2, 3], "audio/webm");
        let submission = PracticeSubmission::new("").with_languages("es", "en");
        let outcome = service.submit_audio(audio, submission).await.unwrap();

        assert_eq!(outcome.entry.original_text, "Yo tiene un gato");
        assert_eq!(outcome.entry.improved_text, "Yo tengo un gato");
    }

    #[tokio::test]
    async fn submit_audio_propagates_transcription_failure() {
        let mut fixture = Fixture::new();
        fixture
            .speech
            .expect_transcribe()
            .returning(|_, _| Err(ApplicationError::Upstream("Status 401".to_string())));
        let store = Arc::clone(&fixture.store);
        let service = fixture.build();

        let audio = AudioUpload::new(vec![1, 2, 3], "audio/webm");
        let result = service
            .submit_audio(audio, PracticeSubmission::new(""))
            .await;

        assert!(matches!(result, Err(ApplicationError::Upstream(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn narrate_returns_none_when_store_fails() {
        let mut fixture = Fixture::new();
        fixture
            .speech
            .expect_synthesize()
            .returning(|_| Ok(vec![1, 2]));
        fixture
            .audio_store
            .expect_save()
            .returning(|_, _| Err(ApplicationError::Storage("disk full".to_string())));
        let service = fixture.build();

        let url = service.narrate("Bonjour", "fr").await;

        assert!(url.is_none());
    }
}
