//! Hardened headers for preview responses.

use axum::extract::Request;
use axum::http::header::{
    CACHE_CONTROL, EXPIRES, HeaderName, PRAGMA, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS,
};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

/// Headers set on every preview response, successful or not.
pub const PREVIEW_HEADERS: [(HeaderName, &str); 6] = [
    (X_FRAME_OPTIONS, "SAMEORIGIN"),
    (X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (REFERRER_POLICY, "strict-origin-when-cross-origin"),
    (CACHE_CONTROL, "private, no-cache, no-store, must-revalidate"),
    (PRAGMA, "no-cache"),
    (EXPIRES, "0"),
];

/// Writes [`PREVIEW_HEADERS`] into `headers`, replacing existing values.
pub fn apply_preview_headers(headers: &mut HeaderMap) {
    for (name, value) in PREVIEW_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
}

/// Middleware applying [`PREVIEW_HEADERS`].
pub async fn preview_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    apply_preview_headers(response.headers_mut());
    response
}
