//! Standalone transcription handler

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use tracing::instrument;

use crate::handlers::practice::read_audio_multipart;
use crate::{error::ApiError, state::AppState};

/// Transcription response
#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    /// Transcribed text
    pub text: String,
    /// Language hint that was applied
    pub language: String,
}

/// Transcribe an uploaded recording without persisting anything
///
/// Multipart fields: `audio` (required file), `language` (optional hint).
#[instrument(skip(state, multipart))]
pub async fn transcribe(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let parts = read_audio_multipart(multipart).await?;
    let audio = parts
        .audio
        .ok_or_else(|| ApiError::BadRequest("Missing 'audio' file field".to_string()))?;

    let text = state
        .practice
        .transcribe(audio, Some(&parts.language))
        .await?;

    Ok(Json(TranscribeResponse {
        text,
        language: parts.language,
    }))
}
