//! # folio-core
//!
//! Core crate for the Folio portfolio backend. Contains configuration
//! schemas, the content model served by the remote content API, the
//! [`ContentSource`](traits::ContentSource) trait, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Folio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
