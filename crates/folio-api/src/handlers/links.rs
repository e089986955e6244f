//! Preview link issuance.

use axum::Json;
use axum::extract::State;

use folio_auth::SubjectId;

use crate::dto::request::CreatePreviewLinkRequest;
use crate::dto::response::{ApiResponse, PreviewLinkResponse};
use crate::error::ApiError;
use crate::extractors::IssuerAuth;
use crate::state::AppState;

/// Builds the site-relative preview path for a subject and token.
pub fn preview_path(subject: &SubjectId, token: &str) -> String {
    format!("/preview/{subject}?token={token}")
}

/// POST /api/preview-links
pub async fn create_preview_link(
    State(state): State<AppState>,
    _issuer: IssuerAuth,
    Json(req): Json<CreatePreviewLinkRequest>,
) -> Result<Json<ApiResponse<PreviewLinkResponse>>, ApiError> {
    let subject = SubjectId::parse(&req.subject_id)?;
    let issued = state.codec.issue(subject.as_str())?;

    let url = state
        .config
        .site
        .absolute_url(&preview_path(&subject, issued.as_str()));
    let expires_at = issued.expires_at();

    tracing::info!(
        subject_id = %subject,
        expires_at = %expires_at,
        "Preview link issued"
    );

    Ok(Json(ApiResponse::ok(PreviewLinkResponse {
        subject_id: subject.into_inner(),
        token: issued.into_string(),
        url,
        expires_at,
    })))
}
