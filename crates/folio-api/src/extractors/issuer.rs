//! `IssuerAuth` extractor: gates preview link issuance behind the issuer key.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use folio_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the request carried the configured issuer key.
#[derive(Debug, Clone, Copy)]
pub struct IssuerAuth;

impl FromRequestParts<AppState> for IssuerAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Without a key the endpoint does not exist.
        let Some(key) = state.issuer_key.as_deref() else {
            return Err(AppError::not_found("Not found").into());
        };

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        if key.matches_header(header) {
            Ok(Self)
        } else {
            Err(AppError::authentication("Invalid issuer key").into())
        }
    }
}
