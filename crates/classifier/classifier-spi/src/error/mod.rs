//! Error types for classifier operations
//!
//! This module provides the [`ClassifierError`] enum and [`Result`] type alias
//! for standardized error handling across datasets, models and artifacts.

mod classifier_error;

pub use classifier_error::{ClassifierError, Result};
