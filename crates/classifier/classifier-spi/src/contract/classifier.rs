//! Classifier trait for labeled feature-space models
//!
//! Defines the core interface every classification model implements.

use crate::error::Result;
use crate::model::{Label, Sample, TrainingSet};

/// Common trait for all sample classifiers
///
/// Follows the fit-then-query pattern: a model is fitted once on a
/// [`TrainingSet`] and then answers any number of [`classify`](Self::classify)
/// calls through a shared reference.
///
/// # Example
///
/// ```rust,ignore
/// use classifier_spi::{Classifier, Sample, TrainingSet};
///
/// fn label_origin<C: Classifier>(model: &mut C, set: &TrainingSet) -> classifier_spi::Result<String> {
///     model.fit(set)?;
///     Ok(model.classify(&Sample::new(0.0, 0.0, 0.0))?.into_inner())
/// }
/// ```
pub trait Classifier {
    /// Fit the model to a labeled training set
    ///
    /// # Returns
    ///
    /// `Ok(())` if fitting succeeds, `Err(ClassifierError)` otherwise
    fn fit(&mut self, training: &TrainingSet) -> Result<()>;

    /// Assign a label to a sample
    ///
    /// Implementations must be deterministic: the same sample always
    /// yields the same label for a given fitted model.
    fn classify(&self, sample: &Sample) -> Result<Label>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
