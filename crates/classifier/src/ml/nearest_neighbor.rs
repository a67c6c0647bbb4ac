//! K-Nearest Neighbors classification
//!
//! Stores every training point and labels a query by the majority label
//! among its `k` closest points.
//!
//! ## Tie-breaking
//!
//! - Points are ranked by Euclidean distance, compared pairwise so that
//!   large coordinates neither overflow nor round two different distances
//!   into a tie.
//! - Equidistant points rank in training-set order.
//! - Equal vote counts go to the label whose first member ranks nearest.
//!
//! With `k = 1` this returns the label of the first closest training point.

use super::distance::compare_distance;
use classifier_spi::{Classifier, ClassifierError, Label, Result, Sample, TrainingSet};
use std::cmp::Ordering;

/// K-Nearest Neighbors classifier over three-feature samples
///
/// @algorithm KNN
/// @category MachineLearning
/// @complexity O(n) fit, O(n*k) classify
/// @thread_safe true (after fit)
/// @since 0.1.0
///
/// # Example
///
/// ```rust
/// use classifier::ml::NearestNeighbors;
/// use classifier::{Classifier, Sample, TrainingSet};
///
/// let training = TrainingSet::new()
///     .with(Sample::new(0.0, 0.0, 0.0), "near")
///     .with(Sample::new(9.0, 9.0, 9.0), "far");
///
/// let mut knn = NearestNeighbors::new(1).unwrap();
/// knn.fit(&training).unwrap();
/// assert_eq!(knn.classify(&Sample::new(1.0, 0.0, 0.0)).unwrap().as_str(), "near");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NearestNeighbors {
    /// Number of neighbors that vote
    k: usize,
    /// Stored training points, in training-set order
    samples: Vec<Sample>,
    /// Label of each stored point
    labels: Vec<Label>,
    /// Whether model has been fitted
    fitted: bool,
}

impl NearestNeighbors {
    /// Create a new classifier
    ///
    /// # Arguments
    ///
    /// * `k` - Number of neighbors to consider (at least 1)
    pub fn new(k: usize) -> Result<Self> {
        if k < 1 {
            return Err(ClassifierError::InvalidParameter {
                name: "k".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            k,
            samples: Vec::new(),
            labels: Vec::new(),
            fitted: false,
        })
    }

    /// Number of neighbors that vote
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of stored training points
    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Indices of the `k` nearest stored points, closest first
    ///
    /// Single pass keeping a bounded, ordered selection. A point only
    /// displaces or precedes one that is strictly farther, so equidistant
    /// points stay in training-set order.
    fn find_neighbors(&self, query: &Sample) -> Vec<usize> {
        let k = self.k.min(self.samples.len());
        let mut nearest: Vec<usize> = Vec::with_capacity(k + 1);
        if k == 0 {
            return nearest;
        }

        for (i, sample) in self.samples.iter().enumerate() {
            let closer = |j: &usize| {
                compare_distance(query, sample, &self.samples[*j]) == Ordering::Less
            };

            if nearest.len() == k && !nearest.last().map_or(false, closer) {
                continue;
            }

            let pos = nearest.iter().position(closer).unwrap_or(nearest.len());
            nearest.insert(pos, i);
            nearest.truncate(k);
        }

        nearest
    }

    /// Majority label among neighbors; ties go to the earliest-ranked label
    fn vote(&self, neighbors: &[usize]) -> Option<Label> {
        let mut tally: Vec<(&Label, usize)> = Vec::new();
        for idx in neighbors {
            let label = &self.labels[*idx];
            match tally.iter_mut().find(|(l, _)| *l == label) {
                Some((_, count)) => *count += 1,
                None => tally.push((label, 1)),
            }
        }

        let mut best: Option<(&Label, usize)> = None;
        for (label, count) in tally {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label.clone())
    }
}

impl Classifier for NearestNeighbors {
    fn fit(&mut self, training: &TrainingSet) -> Result<()> {
        if training.is_empty() {
            return Err(ClassifierError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        if let Some((row, _)) = training
            .samples()
            .enumerate()
            .find(|(_, s)| !s.is_finite())
        {
            return Err(ClassifierError::InvalidData(format!(
                "training sample {} has a non-finite coordinate",
                row
            )));
        }

        self.samples = training.samples().copied().collect();
        self.labels = training.labels().cloned().collect();
        self.fitted = true;
        Ok(())
    }

    fn classify(&self, sample: &Sample) -> Result<Label> {
        if !self.fitted {
            return Err(ClassifierError::NotFitted);
        }

        if !sample.is_finite() {
            return Err(ClassifierError::InvalidData(
                "sample has a non-finite coordinate".to_string(),
            ));
        }

        let neighbors = self.find_neighbors(sample);
        self.vote(&neighbors).ok_or(ClassifierError::InsufficientData {
            required: 1,
            actual: 0,
        })
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
