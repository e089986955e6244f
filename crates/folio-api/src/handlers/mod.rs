//! HTTP request handlers.

pub mod health;
pub mod links;
pub mod preview;
pub mod search;
pub mod seo;
