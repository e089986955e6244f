//! Core traits defined in `folio-core` and implemented by other crates.

pub mod content;

pub use content::ContentSource;
