//! Three-feature sample points.

use serde::{Deserialize, Serialize};

/// Column names of the three features, in feature order.
pub const FEATURE_NAMES: [&str; 3] = ["x", "y", "z"];

/// A point in the three-dimensional feature space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    /// Create a new sample.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Features in `FEATURE_NAMES` order.
    pub fn features(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Whether every coordinate is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.features().iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 3]> for Sample {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Sample> for [f64; 3] {
    fn from(sample: Sample) -> Self {
        sample.features()
    }
}
