//! Site search handler.

use axum::Json;
use axum::extract::{Query, State};

use folio_content::search::clamp_limit;

use crate::dto::request::SearchParams;
use crate::dto::response::{ApiResponse, SearchResponse};
use crate::state::AppState;

/// GET /api/search?q=&limit=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<SearchResponse>> {
    let limit = clamp_limit(params.limit);
    let hits = state.search.search(&params.q, limit).await;

    Json(ApiResponse::ok(SearchResponse {
        query: params.q,
        hits,
    }))
}
