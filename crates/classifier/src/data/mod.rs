//! Dataset files
//!
//! Training sets live in a CSV file with a header row naming at least the
//! feature columns `x`, `y`, `z` and the label column `Consideration`.

mod dataset;

pub use dataset::{load_training_set, read_training_set, render_csv};
