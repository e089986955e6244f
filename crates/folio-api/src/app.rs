//! Application builder: wires configuration, content source, and router
//! into a running server.

use std::sync::Arc;

use axum::Router;

use folio_content::ContentApiClient;
use folio_core::config::AppConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::traits::ContentSource;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application over an arbitrary content source.
pub fn build_app(config: AppConfig, content: Arc<dyn ContentSource>) -> Result<Router, AppError> {
    let state = AppState::new(config, content)?;
    Ok(build_router(state))
}

/// Runs the Folio server until Ctrl+C.
///
/// Fails before binding when the configuration is invalid, most notably
/// when no preview secret is set.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Folio server...");

    config.validate()?;

    let content: Arc<dyn ContentSource> = Arc::new(ContentApiClient::new(&config.content)?);
    tracing::info!(
        base_url = %config.content.base_url,
        timeout_seconds = config.content.timeout_seconds,
        "Content API client ready"
    );

    let addr = config.server.bind_address();
    let app = build_app(config, content)?;

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    tracing::info!("Folio server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    tracing::info!("Folio server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C, shutting down");
    }
}
