//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/preview-links`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePreviewLinkRequest {
    /// Identifier of the collection to share.
    pub subject_id: String,
}

/// Query string of `GET /api/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text query.
    #[serde(default)]
    pub q: String,
    /// Maximum number of hits.
    pub limit: Option<usize>,
}

/// Query string of `GET /preview/{subject_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewQuery {
    /// Signed preview token.
    pub token: Option<String>,
}
