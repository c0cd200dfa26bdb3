//! Error types.
//!
//! - [`ConventionError`] - failures of the naming core (template parsing, bad arguments)
//! - [`AppError`] - HTTP-facing errors rendered as the error envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::api::envelope::ErrorEnvelope;

/// Errors raised by the naming core and its configuration.
///
/// Both kinds are deterministic: retrying with the same input fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConventionError {
    #[error("Malformed route template '{template}': {reason}")]
    MalformedTemplate { template: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ConventionError {
    pub fn malformed(template: &str, reason: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            AppError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, "validation_error", message.as_str())
            }
            AppError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "not_found", message.as_str())
            }
            AppError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message.as_str(),
            ),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (_, code, message) = self.parts();
        write!(f, "{code}: {message}")
    }
}

impl std::error::Error for AppError {}

impl From<ConventionError> for AppError {
    fn from(err: ConventionError) -> Self {
        match &err {
            ConventionError::MalformedTemplate { template, .. } => AppError::internal(
                err.to_string(),
                json!({ "template": template }),
            ),
            ConventionError::InvalidArgument(_) => AppError::bad_request(err.to_string(), json!({})),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, _) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        ErrorEnvelope::new(code, message, details)
            .with_status(status)
            .into_response()
    }
}
