//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Entity not found
    #[error("{entity_type} with ID {id} not found")]
    NotFound { entity_type: String, id: String },

    /// Language code is not in the supported set
    #[error("Sorry, we currently don't support '{code}' as a {role} language.")]
    UnsupportedLanguage {
        /// The rejected language code
        code: String,
        /// Which request field held it ("practice" or "native")
        role: String,
    },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create an unsupported-language error
    pub fn unsupported_language(code: impl Into<String>, role: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            code: code.into(),
            role: role.into(),
        }
    }
}
