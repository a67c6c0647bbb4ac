//! Liveness and readiness probes

use crate::AppState;
use axum::{extract::State, Json};

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - is the model loaded and able to answer?
///
/// The model is loaded before the listener binds, so a responding server is
/// always ready; the body reports what it is serving.
pub async fn readiness(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ready",
        "version": env!("CARGO_PKG_VERSION"),
        "model": {
            "k": state.model.k(),
            "samples": state.model.n_samples(),
            "labels": state.model.labels().iter().map(|l| l.as_str()).collect::<Vec<_>>(),
        }
    }))
}
