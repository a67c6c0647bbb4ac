//! API route handlers

use crate::error::ApiError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use classifier::data::render_csv;
use classifier::{Label, Sample};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

/// Body returned by `/api/brain-data` when the dataset file is absent.
pub const DATASET_NOT_FOUND: &str = "CSV file not found";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictRequest {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<PredictRequest> for Sample {
    fn from(req: PredictRequest) -> Self {
        Sample::new(req.x, req.y, req.z)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub consideration: Vec<Label>,
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(req) = payload?;
    let label = state.model.classify(&Sample::from(req))?;

    tracing::debug!(x = req.x, y = req.y, z = req.z, label = %label, "prediction");

    Ok(Json(PredictResponse {
        consideration: vec![label],
    }))
}

/// Dataset as CSV text, re-read on every request.
pub async fn brain_data(State(state): State<AppState>) -> Result<String, ApiError> {
    match tokio::fs::read(state.dataset_path.as_path()).await {
        Ok(bytes) => Ok(render_csv(bytes.as_slice())?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %state.dataset_path.display(), "dataset file not found");
            Ok(DATASET_NOT_FOUND.to_string())
        }
        Err(e) => Err(ApiError::internal(format!(
            "Failed to read dataset: {}",
            e
        ))),
    }
}
