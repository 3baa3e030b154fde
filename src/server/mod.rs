pub mod handlers;
pub mod types;

use crate::{Result, config::Config, mood::InferenceMode};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/infer", post(handlers::infer))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Build the engine once; every request shares it
    let mode = InferenceMode::from_config(&config.engine)?;

    if config.engine.warm_up
        && let Err(e) = warm_up(&mode).await
    {
        warn!(
            "Model warm-up failed, requests will fall back until the engine recovers: {}",
            e
        );
    }

    let app = router(AppState::new(mode));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Loads the model ahead of traffic. Stub mode has nothing to load.
async fn warm_up(mode: &InferenceMode) -> Result<()> {
    if let InferenceMode::Model(classifier) = mode {
        classifier.warm_up().await?;
    }
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
