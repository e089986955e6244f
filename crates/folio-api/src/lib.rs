//! # folio-api
//!
//! HTTP layer for Folio built on Axum.
//!
//! Serves the signed preview gate, preview link issuance, search, health,
//! and SEO routes, together with middleware (hardening headers, request
//! logging, CORS) and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
