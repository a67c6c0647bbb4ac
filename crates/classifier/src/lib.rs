//! Nearest-neighbor Consideration classifier
//!
//! This crate implements the model behind the prediction service, organized
//! by concern:
//!
//! - [`ml`]: the nearest-neighbor classifier and its distance function
//! - [`data`]: reading training sets from CSV and re-emitting dataset text
//! - [`artifact`]: the persisted JSON model format
//! - [`store`]: the immutable, shareable model handle used at serving time
//!
//! ## Example
//!
//! ```rust
//! use classifier::prelude::*;
//!
//! let training = TrainingSet::new()
//!     .with(Sample::new(0.0, 0.0, 0.0), "Rest")
//!     .with(Sample::new(5.0, 5.0, 5.0), "Act");
//!
//! let mut model = NearestNeighbors::new(1).unwrap();
//! model.fit(&training).unwrap();
//! let store = ModelStore::from_model(model).unwrap();
//! assert_eq!(store.classify(&Sample::new(4.0, 4.0, 4.0)).unwrap().as_str(), "Act");
//! ```

pub mod artifact;
pub mod data;
pub mod ml;
pub mod store;

pub use classifier_spi::{
    Classifier, ClassifierError, Label, LabeledSample, Result, Sample, TrainingSet, FEATURE_NAMES,
    LABEL_COLUMN,
};

pub use artifact::ModelArtifact;
pub use ml::NearestNeighbors;
pub use store::ModelStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::artifact::ModelArtifact;
    pub use crate::data::{load_training_set, read_training_set, render_csv};
    pub use crate::ml::NearestNeighbors;
    pub use crate::store::ModelStore;
    pub use classifier_spi::{
        Classifier, ClassifierError, Label, LabeledSample, Result, Sample, TrainingSet,
    };
}
