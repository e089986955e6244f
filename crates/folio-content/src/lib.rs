//! # folio-content
//!
//! Everything Folio derives from the remote content API:
//!
//! - `client` — the reqwest-backed [`ContentSource`](folio_core::traits::ContentSource)
//! - `search` — relevance-scored search across blog posts and projects
//! - `sitemap` — `sitemap.xml` and `robots.txt` generation

pub mod client;
pub mod search;
pub mod sitemap;

pub use client::ContentApiClient;
pub use search::{HitKind, SearchHit, SearchService};
pub use sitemap::{SitemapEntry, SitemapService};

use folio_core::AppResult;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything but RFC 3986 unreserved characters is escaped in a segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes an upstream slug for use as one URL path segment.
pub fn encode_segment(slug: &str) -> String {
    utf8_percent_encode(slug, SEGMENT).to_string()
}

/// Collapses a failed list fetch into an empty list, logging the failure.
///
/// Search and sitemap output degrade per endpoint rather than failing as a
/// whole.
pub(crate) fn or_empty<T>(what: &'static str, result: AppResult<Vec<T>>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(endpoint = what, error = %e, "Content fetch failed, continuing without it");
            Vec::new()
        }
    }
}
