//! CSV dataset reading and rendering.

use classifier_spi::{ClassifierError, Label, Result, Sample, TrainingSet, FEATURE_NAMES, LABEL_COLUMN};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a training set from a CSV file.
pub fn load_training_set(path: &Path) -> Result<TrainingSet> {
    let file = File::open(path)?;
    read_training_set(BufReader::new(file))
}

/// Read a training set from CSV text.
///
/// Columns are located by header name; other columns are ignored. Labels are
/// kept as text exactly as they appear in the file.
pub fn read_training_set<R: Read>(reader: R) -> Result<TrainingSet> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| ClassifierError::Dataset(e.to_string()))?
        .clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ClassifierError::Dataset(format!("Column '{}' not found", name)))
    };
    let feature_idx = [
        column(FEATURE_NAMES[0])?,
        column(FEATURE_NAMES[1])?,
        column(FEATURE_NAMES[2])?,
    ];
    let label_idx = column(LABEL_COLUMN)?;

    let mut training = TrainingSet::new();
    for result in reader.records() {
        let record = result.map_err(|e| ClassifierError::Dataset(e.to_string()))?;
        let line = record.position().map_or(0, |p| p.line());

        let mut features = [0.0; 3];
        for (slot, (idx, name)) in features
            .iter_mut()
            .zip(feature_idx.iter().zip(FEATURE_NAMES.iter()))
        {
            let field = record.get(*idx).unwrap_or("").trim();
            *slot = field.parse::<f64>().map_err(|_| {
                ClassifierError::Dataset(format!(
                    "line {}: column '{}' is not numeric: {:?}",
                    line, name, field
                ))
            })?;
        }

        let sample = Sample::from(features);
        if !sample.is_finite() {
            return Err(ClassifierError::Dataset(format!(
                "line {}: non-finite feature value",
                line
            )));
        }

        let label = record.get(label_idx).unwrap_or("");
        training.push(sample, Label::new(label));
    }

    if training.is_empty() {
        return Err(ClassifierError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    Ok(training)
}

/// Parse CSV text and re-emit it: header first, every column in source order.
pub fn render_csv<R: Read>(reader: R) -> Result<String> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut writer = csv::Writer::from_writer(Vec::new());

    let headers = reader
        .headers()
        .map_err(|e| ClassifierError::Dataset(e.to_string()))?
        .clone();
    writer
        .write_record(&headers)
        .map_err(|e| ClassifierError::Dataset(e.to_string()))?;

    for result in reader.records() {
        let record = result.map_err(|e| ClassifierError::Dataset(e.to_string()))?;
        writer
            .write_record(&record)
            .map_err(|e| ClassifierError::Dataset(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ClassifierError::Dataset(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ClassifierError::Dataset(e.to_string()))
}
