//! Classifier Service Provider Interface
//!
//! Defines the data model, contract trait and error types shared by the
//! Consideration classifier, the HTTP server and the command-line tool:
//!
//! - [`Sample`], [`Label`], [`LabeledSample`], [`TrainingSet`]: the data model
//! - [`Classifier`]: the fit/classify contract every model implements
//! - [`ClassifierError`]: standardized error type for all classifier operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Classifier;
pub use error::{ClassifierError, Result};
pub use model::{Label, LabeledSample, Sample, TrainingSet, FEATURE_NAMES, LABEL_COLUMN};
