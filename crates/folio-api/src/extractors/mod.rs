//! Custom Axum extractors.

pub mod issuer;

pub use issuer::IssuerAuth;
