//! Serving-time model handle.

use crate::artifact::ModelArtifact;
use crate::ml::NearestNeighbors;
use classifier_spi::{Classifier, ClassifierError, Label, Result, Sample};
use std::collections::BTreeSet;
use std::path::Path;

/// An immutable, fitted classifier loaded once and shared by every request.
///
/// All methods take `&self`; wrap in an `Arc` to share across threads.
#[derive(Debug, Clone)]
pub struct ModelStore {
    model: NearestNeighbors,
    labels: BTreeSet<Label>,
}

impl ModelStore {
    /// Load and validate a model artifact file.
    pub fn load(path: &Path) -> Result<Self> {
        let model = ModelArtifact::load(path)?.into_model()?;
        Self::from_model(model)
    }

    /// Wrap an already fitted model.
    pub fn from_model(model: NearestNeighbors) -> Result<Self> {
        if !model.is_fitted() {
            return Err(ClassifierError::NotFitted);
        }
        let labels = model.labels().iter().cloned().collect();
        Ok(Self { model, labels })
    }

    /// Label a sample. Deterministic for a given store.
    pub fn classify(&self, sample: &Sample) -> Result<Label> {
        self.model.classify(sample)
    }

    pub fn k(&self) -> usize {
        self.model.k()
    }

    /// Number of stored training points.
    pub fn n_samples(&self) -> usize {
        self.model.n_samples()
    }

    /// Distinct labels the store can return, sorted.
    pub fn labels(&self) -> &BTreeSet<Label> {
        &self.labels
    }
}
