//! Machine learning classifiers
//!
//! - [`NearestNeighbors`]: k-nearest-neighbor majority vote (k=1 by default)

pub mod distance;
pub mod nearest_neighbor;

pub use nearest_neighbor::NearestNeighbors;
