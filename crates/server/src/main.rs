//! # server
//!
//! Binary entry point: load configuration and the model, then serve.

use server::{build_router, load_model, AppState, ServerConfig};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn run() -> server::Result<()> {
    let config = ServerConfig::from_env()?;

    // Fail before binding if the artifact is missing or corrupt
    let model = load_model(&config.model_path)?;
    tracing::info!(
        path = %config.model_path.display(),
        samples = model.n_samples(),
        k = model.k(),
        "model loaded"
    );

    let state = AppState::new(model, config.dataset_path.clone());
    let app = build_router(state, &config.frontend_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        "server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
