//! Data model for labeled feature-space points.

mod label;
mod sample;
mod training_set;

pub use label::Label;
pub use sample::{Sample, FEATURE_NAMES};
pub use training_set::{LabeledSample, TrainingSet, LABEL_COLUMN};
