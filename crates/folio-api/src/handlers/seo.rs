//! `sitemap.xml` and `robots.txt`.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use crate::state::AppState;

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let xml = state.sitemap.generate().await;
    ([(CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.sitemap.robots(),
    )
}
