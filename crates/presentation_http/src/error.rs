//! API error handling
//!
//! Maps application errors to HTTP responses. Validation problems keep
//! their specific, user-actionable message; upstream and internal
//! failures get a fixed generic message, with the detail logged
//! server-side only.

use application::ApplicationError;
use domain::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            },
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            // Domain messages are specific and safe to show
            ApplicationError::Domain(e @ DomainError::NotFound { .. }) => {
                Self::NotFound(e.to_string())
            },
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Upstream(msg) | ApplicationError::Parse(msg) => {
                warn!(detail = %msg, "Upstream failure");
                Self::ServiceUnavailable(
                    "The AI service is temporarily unavailable. Please try again.".to_string(),
                )
            },
            ApplicationError::Configuration(msg) => {
                error!(detail = %msg, "Configuration problem");
                Self::Internal("Service configuration error. Please contact support.".to_string())
            },
            ApplicationError::Storage(msg) | ApplicationError::Internal(msg) => {
                error!(detail = %msg, "Internal failure");
                Self::Internal("An internal error occurred. Please try again.".to_string())
            },
        }
    }
}
