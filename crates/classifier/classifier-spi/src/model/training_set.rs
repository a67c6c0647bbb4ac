//! Ordered collections of labeled samples.

use super::{Label, Sample};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Name of the column holding labels in a dataset file.
pub const LABEL_COLUMN: &str = "Consideration";

/// A sample together with its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub sample: Sample,
    pub label: Label,
}

impl LabeledSample {
    /// Create a new labeled sample.
    pub fn new(sample: Sample, label: impl Into<Label>) -> Self {
        Self {
            sample,
            label: label.into(),
        }
    }
}

/// Labeled samples in source order.
///
/// Order is significant: nearest-neighbor ties resolve to the earliest entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    records: Vec<LabeledSample>,
}

impl TrainingSet {
    /// Create an empty training set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a labeled sample.
    pub fn push(&mut self, sample: Sample, label: impl Into<Label>) {
        self.records.push(LabeledSample::new(sample, label));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, sample: Sample, label: impl Into<Label>) -> Self {
        self.push(sample, label);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledSample> {
        self.records.iter()
    }

    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.records.iter().map(|r| &r.sample)
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.records.iter().map(|r| &r.label)
    }

    /// Distinct labels, sorted.
    pub fn distinct_labels(&self) -> BTreeSet<Label> {
        self.labels().cloned().collect()
    }
}

impl FromIterator<LabeledSample> for TrainingSet {
    fn from_iter<I: IntoIterator<Item = LabeledSample>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TrainingSet {
    type Item = LabeledSample;
    type IntoIter = std::vec::IntoIter<LabeledSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a TrainingSet {
    type Item = &'a LabeledSample;
    type IntoIter = std::slice::Iter<'a, LabeledSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
