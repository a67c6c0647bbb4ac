//! Contract traits for classifier implementations
//!
//! - [`Classifier`]: fit on a training set, then map samples to labels

mod classifier;

pub use classifier::Classifier;
