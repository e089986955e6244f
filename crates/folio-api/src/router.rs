//! Route definitions for the Folio HTTP server.
//!
//! Preview pages and SEO files live at the root; the JSON API is mounted
//! under `/api`.

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(search_routes())
        .merge(preview_link_routes())
        .layer(cors);

    Router::new()
        .merge(preview_routes())
        .merge(seo_routes())
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(middleware::logging::make_request_span))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Token-gated collection previews
fn preview_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/preview/{subject_id}",
            get(handlers::preview::preview_collection),
        )
        .route_layer(axum_middleware::from_fn(
            middleware::security::preview_headers,
        ))
}

/// Sitemap and robots
fn seo_routes() -> Router<AppState> {
    Router::new()
        .route("/sitemap.xml", get(handlers::seo::sitemap))
        .route("/robots.txt", get(handlers::seo::robots))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Site search
fn search_routes() -> Router<AppState> {
    Router::new().route("/search", get(handlers::search::search))
}

/// Preview link issuance
fn preview_link_routes() -> Router<AppState> {
    Router::new().route(
        "/preview-links",
        post(handlers::links::create_preview_link),
    )
}
