//! Token-gated preview of unpublished collections.
//!
//! Failures answer with a bare status line. The submitted token and any
//! upstream detail never reach the response body.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, warn};

use crate::dto::request::PreviewQuery;
use crate::state::AppState;

/// Why a preview request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewRejection {
    /// No token in the query string.
    MissingToken,
    /// Malformed, expired, or forged token. Callers cannot tell which.
    InvalidToken,
    /// Valid token bound to a different collection.
    SubjectMismatch,
    /// Upstream has no content for the collection, failed, or timed out.
    NotFound,
    /// Anything else.
    Internal,
}

impl PreviewRejection {
    /// HTTP status for this rejection.
    pub fn status(self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::SubjectMismatch => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PreviewRejection {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = status.canonical_reason().unwrap_or("Error");
        (status, reason).into_response()
    }
}

/// GET /preview/{subject_id}?token=...
pub async fn preview_collection(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Result<Html<String>, PreviewRejection> {
    let token = query
        .ok()
        .and_then(|Query(q)| q.token)
        .filter(|t| !t.is_empty())
        .ok_or(PreviewRejection::MissingToken)?;

    let verified = state
        .codec
        .verify(&token)
        .ok_or(PreviewRejection::InvalidToken)?;

    if !verified.grants(&subject_id) {
        debug!(
            requested = %subject_id,
            granted = %verified.subject_id(),
            "Preview token bound to another collection"
        );
        return Err(PreviewRejection::SubjectMismatch);
    }

    let fetch = state.content.collection_html(&subject_id);
    let Ok(result) = tokio::time::timeout(state.config.content.timeout(), fetch).await else {
        warn!(subject_id = %subject_id, "Preview content fetch timed out");
        return Err(PreviewRejection::NotFound);
    };

    match result {
        Ok(Some(html)) => {
            debug!(subject_id = %subject_id, bytes = html.len(), "Serving preview");
            Ok(Html(html))
        }
        Ok(None) => Err(PreviewRejection::NotFound),
        Err(e) if e.is_upstream() => {
            warn!(subject_id = %subject_id, error = %e, "Preview content fetch failed");
            Err(PreviewRejection::NotFound)
        }
        Err(e) => {
            tracing::error!(subject_id = %subject_id, error = %e, "Preview failed");
            Err(PreviewRejection::Internal)
        }
    }
}
