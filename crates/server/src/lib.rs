//! # server
//!
//! REST API for the Consideration classifier.
//!
//! - `POST /predict` (and `/predict/`): label a three-feature sample
//! - `GET /api/brain-data`: the backing dataset as CSV text
//! - `GET /` and `/static/*`: the bundled frontend
//! - `GET /health`, `/health/live`, `/health/ready`: probes
//!
//! The model is loaded once at startup into an `Arc<ModelStore>` carried by
//! the router state; handlers only ever read it.

use axum::{
    routing::{get, post},
    Router,
};
use classifier::ModelStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod health;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorResponse, Result, ServerError};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<ModelStore>,
    pub dataset_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(model: ModelStore, dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            model: Arc::new(model),
            dataset_path: Arc::new(dataset_path.into()),
        }
    }
}

/// Load the model artifact, failing with the offending path on error.
pub fn load_model(path: &Path) -> Result<ModelStore> {
    ModelStore::load(path).map_err(|source| ServerError::Model {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the full router: API routes, frontend files, CORS and tracing.
pub fn build_router(state: AppState, frontend_dir: &Path) -> Router {
    // Open to every origin for local frontend development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Frontend
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(frontend_dir))
        // Health endpoints
        .route("/health", get(health::liveness))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        // API endpoints
        .route("/predict", post(routes::predict))
        .route("/predict/", post(routes::predict))
        .route("/api/brain-data", get(routes::brain_data))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
