//! Analysis service - LLM-backed text correction and feedback

use std::sync::Arc;

use domain::{DifficultWord, DomainError, ErrorItem};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{GenerationPort, GenerationRequest};
use crate::prompts;

const ANALYSIS_TEMPERATURE: f32 = 0.7;
const ANALYSIS_MAX_TOKENS: u32 = 1500;

/// Result of analyzing a practice text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Improved/corrected version of the text
    pub improved_text: String,
    /// Corrections found in the text
    pub errors: Vec<ErrorItem>,
    /// Words the learner may find difficult
    pub difficult_words: Vec<DifficultWord>,
}

/// Shape of the model's JSON reply. Arrays the model omits deserialize
/// to empty rather than failing the whole analysis.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    improved_text: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorItem>,
    #[serde(default)]
    difficult_words: Vec<DifficultWord>,
}

/// Service for analyzing learner text via the generation port
pub struct AnalysisService {
    generation: Arc<dyn GenerationPort>,
}

impl AnalysisService {
    /// Create a new analysis service
    pub fn new(generation: Arc<dyn GenerationPort>) -> Self {
        Self { generation }
    }

    /// Analyze the given text, producing corrections and vocabulary help
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty text, `Upstream` when the
    /// generation call fails, and `Parse` when the reply is not the
    /// expected JSON shape.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn analyze(
        &self,
        text: &str,
        practice_language: &str,
        native_language: &str,
    ) -> Result<Analysis, ApplicationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(
                DomainError::ValidationError("Text cannot be empty".to_string()).into(),
            );
        }

        let prompts = prompts::analysis_prompts(text, practice_language, native_language);
        let request = GenerationRequest::new(
            prompts.system,
            prompts.user,
            ANALYSIS_TEMPERATURE,
            ANALYSIS_MAX_TOKENS,
        );

        let content = self.generation.generate(request).await?;
        debug!(reply_len = content.len(), "Received analysis reply");

        let stripped = strip_code_fences(&content);
        let raw: RawAnalysis = serde_json::from_str(stripped).map_err(|e| {
            warn!(error = %e, "Analysis reply was not valid JSON");
            ApplicationError::Parse("Analysis response was not in the expected format".to_string())
        })?;

        Ok(Analysis {
            improved_text: raw
                .improved_text
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| text.to_string()),
            errors: raw.errors,
            difficult_words: raw.difficult_words,
        })
    }
}

/// Strip markdown code fences the model sometimes wraps JSON in
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();

    if let Some(rest) = trimmed.split_once("```json").map(|(_, rest)| rest) {
        return rest.split("```").next().unwrap_or(rest).trim();
    }

    if let Some(rest) = trimmed.split_once("```").map(|(_, rest)| rest) {
        return rest.split("```").next().unwrap_or(rest).trim();
    }

    trimmed
}
