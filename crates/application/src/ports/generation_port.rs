//! Generation port - Interface for LLM text generation

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A chat-completion style generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// System prompt framing the model's role
    pub system: String,
    /// User message
    pub user: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// Create a new request with the given prompts and sampling settings
    pub fn new(
        system: impl Into<String>,
        user: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature,
            max_tokens,
        }
    }
}

/// Port for text generation via an LLM
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Generate a completion for the request, returning the raw model output
    async fn generate(&self, request: GenerationRequest) -> Result<String, ApplicationError>;
}
