//! Error types for startup and request handling.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use classifier::ClassifierError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for server startup operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model artifact missing or corrupt
    #[error("Failed to load model from {}: {source}", .path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: ClassifierError,
    },

    /// Socket bind or serve failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An error returned from a request handler
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.message);
        } else {
            tracing::debug!(status = %self.status, "{}", self.message);
        }
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

// Keeps axum's own status for each rejection (400, 415, 422)
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::InvalidData(_) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            _ => Self::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_data_is_client_error() {
        let err = ApiError::from(ClassifierError::InvalidData("NaN".to_string()));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message(), "Invalid data: NaN");
    }

    #[test]
    fn test_other_classifier_errors_are_internal() {
        let err = ApiError::from(ClassifierError::NotFitted);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_model_error_display() {
        let err = ServerError::Model {
            path: PathBuf::from("data/model.json"),
            source: ClassifierError::Io("No such file or directory".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load model from data/model.json: I/O error: No such file or directory"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ServerError::Config("PORT must be a valid number".to_string());
        assert_eq!(err.to_string(), "Configuration error: PORT must be a valid number");
    }
}
