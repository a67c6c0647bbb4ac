//! Persisted model artifacts
//!
//! A fitted [`NearestNeighbors`] model is stored as a JSON document:
//!
//! ```json
//! {"algorithm":"knn","k":1,"features":["x","y","z"],"samples":[[1.0,2.0,3.0]],"labels":["Reflect"]}
//! ```
//!
//! Loading validates the document shape and refits, so a loaded model
//! classifies identically to the one that was saved.

use crate::ml::NearestNeighbors;
use classifier_spi::{
    Classifier, ClassifierError, Label, LabeledSample, Result, Sample, TrainingSet, FEATURE_NAMES,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Serialized form of a fitted nearest-neighbor model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub algorithm: String,
    #[serde(default = "default_k")]
    pub k: usize,
    pub features: Vec<String>,
    pub samples: Vec<[f64; 3]>,
    pub labels: Vec<Label>,
}

fn default_k() -> usize {
    1
}

impl ModelArtifact {
    /// Value of the `algorithm` field for nearest-neighbor models.
    pub const ALGORITHM: &'static str = "knn";

    /// Capture a fitted model.
    pub fn from_model(model: &NearestNeighbors) -> Result<Self> {
        if !model.is_fitted() {
            return Err(ClassifierError::NotFitted);
        }

        Ok(Self {
            algorithm: Self::ALGORITHM.to_string(),
            k: model.k(),
            features: FEATURE_NAMES.iter().map(|f| f.to_string()).collect(),
            samples: model.samples().iter().map(Sample::features).collect(),
            labels: model.labels().to_vec(),
        })
    }

    /// Rebuild the fitted model, rejecting malformed artifacts.
    pub fn into_model(self) -> Result<NearestNeighbors> {
        if self.algorithm != Self::ALGORITHM {
            return Err(ClassifierError::Artifact(format!(
                "unsupported algorithm '{}'",
                self.algorithm
            )));
        }
        if self.features.iter().map(String::as_str).ne(FEATURE_NAMES.iter().copied()) {
            return Err(ClassifierError::Artifact(format!(
                "expected features {:?}, found {:?}",
                FEATURE_NAMES, self.features
            )));
        }
        if self.samples.len() != self.labels.len() {
            return Err(ClassifierError::Artifact(format!(
                "{} samples but {} labels",
                self.samples.len(),
                self.labels.len()
            )));
        }
        if self.samples.is_empty() {
            return Err(ClassifierError::Artifact("no training samples".to_string()));
        }

        let training: TrainingSet = self
            .samples
            .into_iter()
            .zip(self.labels)
            .map(|(s, l)| LabeledSample::new(Sample::from(s), l))
            .collect();

        let mut model = NearestNeighbors::new(self.k)
            .map_err(|e| ClassifierError::Artifact(e.to_string()))?;
        model
            .fit(&training)
            .map_err(|e| ClassifierError::Artifact(e.to_string()))?;
        Ok(model)
    }

    /// Parse an artifact from JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| ClassifierError::Artifact(e.to_string()))
    }

    /// Write the artifact as JSON.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self).map_err(|e| ClassifierError::Artifact(e.to_string()))
    }

    /// Read an artifact file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Write an artifact file, replacing any existing one.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
