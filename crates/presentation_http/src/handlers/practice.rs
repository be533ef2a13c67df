//! Practice submission handlers

use axum::{
    Json,
    extract::{Multipart, State},
};
use domain::NotebookEntry;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use application::ports::AudioUpload;
use application::{PracticeOutcome, PracticeSubmission};

use crate::{error::ApiError, state::AppState};

fn default_language() -> String {
    "en".to_string()
}

/// Text submission request body
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Text to analyze
    pub text: String,
    /// Optional practice topic
    #[serde(default)]
    pub topic: Option<String>,
    /// Language being practiced
    #[serde(default = "default_language")]
    pub practice_language: String,
    /// Learner's native language for explanations
    #[serde(default = "default_language")]
    pub native_language: String,
}

/// Practice submission response
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Whether processing succeeded
    pub success: bool,
    /// The persisted notebook entry
    pub entry: NotebookEntry,
    /// Audio of the improved text, when synthesis succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Human-readable status message
    pub message: String,
}

impl From<PracticeOutcome> for SubmitResponse {
    fn from(outcome: PracticeOutcome) -> Self {
        Self {
            success: true,
            entry: outcome.entry,
            audio_url: outcome.audio_url,
            message: "Practice submitted and analyzed successfully".to_string(),
        }
    }
}

/// Accept learner text, analyze it, and save a notebook entry
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
    }

    let mut submission = PracticeSubmission::new(request.text)
        .with_languages(request.practice_language, request.native_language);
    if let Some(topic) = request.topic {
        submission = submission.with_topic(topic);
    }

    let outcome = state.practice.submit_text(submission).await?;

    Ok(Json(outcome.into()))
}

/// Accept an audio recording, transcribe it, then run the text pipeline
///
/// Multipart fields: `audio` (required file), `language`, `topic`,
/// `native_language` (optional text fields).
#[instrument(skip(state, multipart))]
pub async fn submit_audio(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SubmitResponse>, ApiError> {
    let parts = read_audio_multipart(multipart).await?;
    let audio = parts
        .audio
        .ok_or_else(|| ApiError::BadRequest("Missing 'audio' file field".to_string()))?;

    let mut submission = PracticeSubmission::new(String::new())
        .with_languages(parts.language, parts.native_language);
    if let Some(topic) = parts.topic {
        submission = submission.with_topic(topic);
    }

    let outcome = state.practice.submit_audio(audio, submission).await?;

    Ok(Json(outcome.into()))
}

/// Fields accepted by the audio multipart endpoints
pub struct AudioMultipart {
    pub audio: Option<AudioUpload>,
    pub language: String,
    pub native_language: String,
    pub topic: Option<String>,
}

/// Read the common audio multipart shape, enforcing the upload size bound
pub async fn read_audio_multipart(mut multipart: Multipart) -> Result<AudioMultipart, ApiError> {
    let mut parts = AudioMultipart {
        audio: None,
        language: default_language(),
        native_language: default_language(),
        topic: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        match field.name().unwrap_or_default() {
            "audio" => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("audio/webm")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read audio: {e}")))?;
                if data.is_empty() {
                    return Err(ApiError::BadRequest("Audio file is empty".to_string()));
                }
                parts.audio = Some(AudioUpload::new(data.to_vec(), mime_type));
            },
            "language" => parts.language = read_text_field(field).await?,
            "native_language" => parts.native_language = read_text_field(field).await?,
            "topic" => parts.topic = Some(read_text_field(field).await?),
            _ => {},
        }
    }

    Ok(parts)
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart field: {e}")))
}
