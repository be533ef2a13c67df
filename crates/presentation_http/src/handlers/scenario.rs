//! Scenario generation handlers

use application::ApplicationError;
use axum::{Json, extract::State};
use domain::{DomainError, language};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

fn default_language() -> String {
    "en".to_string()
}

/// Scenario generation request body
#[derive(Debug, Deserialize)]
pub struct ScenarioRequest {
    /// Topic keyword or description (e.g. "ordering food")
    pub user_input: String,
    /// Target language for the scenario
    #[serde(default = "default_language")]
    pub practice_language: String,
    /// Language task instructions are written in
    #[serde(default = "default_language")]
    pub native_language: String,
    /// Also synthesize the scenario as audio
    #[serde(default)]
    pub generate_audio: bool,
}

/// Scenario generation response
#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    /// Situation description in the practice language
    pub scenario_text: String,
    /// What the learner should say or do
    pub task_instructions: String,
    /// Language of the scenario
    pub practice_language: String,
    /// Spoken scenario, when requested and synthesis succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// Generate a practice scenario for a topic
#[instrument(skip(state, request), fields(topic = %request.user_input))]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<ScenarioRequest>,
) -> Result<Json<ScenarioResponse>, ApiError> {
    if !language::is_supported(&request.practice_language) {
        return Err(ApplicationError::from(DomainError::unsupported_language(
            request.practice_language,
            "practice",
        ))
        .into());
    }

    if !language::is_supported(&request.native_language) {
        return Err(ApplicationError::from(DomainError::unsupported_language(
            request.native_language,
            "native",
        ))
        .into());
    }

    let scenario = state
        .scenario
        .generate(
            &request.user_input,
            &request.practice_language,
            &request.native_language,
        )
        .await
        .ok_or_else(|| {
            ApiError::ServiceUnavailable(
                "Failed to generate scenario. Please try again.".to_string(),
            )
        })?;

    let audio_url = if request.generate_audio {
        state
            .practice
            .narrate(&scenario.scenario_text, &scenario.practice_language)
            .await
    } else {
        None
    };

    Ok(Json(ScenarioResponse {
        scenario_text: scenario.scenario_text,
        task_instructions: scenario.task_instructions,
        practice_language: scenario.practice_language,
        audio_url,
    }))
}
