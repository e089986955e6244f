//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_content::SearchHit;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process can answer.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// A freshly issued preview link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewLinkResponse {
    /// Collection the link unlocks.
    pub subject_id: String,
    /// Signed token.
    pub token: String,
    /// Absolute preview URL with the token attached.
    pub url: String,
    /// When the token stops verifying.
    pub expires_at: DateTime<Utc>,
}

/// Search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as received.
    pub query: String,
    /// Ranked hits.
    pub hits: Vec<SearchHit>,
}
