//! Classifier error types
//!
//! Defines the standardized error type for all classifier operations.

use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors that can occur while loading data, fitting or querying a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before classification")]
    NotFitted,

    /// Invalid sample data (e.g. non-finite coordinates)
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Dataset file could not be parsed
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Model artifact is corrupt or has the wrong shape
    #[error("Model artifact error: {0}")]
    Artifact(String),

    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ClassifierError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
