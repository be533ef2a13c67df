//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Upstream AI service error
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// Upstream response could not be parsed
    #[error("Failed to parse upstream response: {0}")]
    Parse(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Upstream(_) | Self::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_is_retryable() {
        assert!(ApplicationError::Upstream("503".to_string()).is_retryable());
        assert!(ApplicationError::Parse("bad json".to_string()).is_retryable());
    }

    #[test]
    fn configuration_error_is_not_retryable() {
        assert!(!ApplicationError::Configuration("no key".to_string()).is_retryable());
    }

    #[test]
    fn domain_error_converts() {
        let err: ApplicationError = DomainError::ValidationError("empty text".to_string()).into();
        assert_eq!(err.to_string(), "Validation failed: empty text");
    }
}
