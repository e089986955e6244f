//! Signed preview tokens.
//!
//! A token has the wire form `<subject>.<expires_at_ms>.<signature>` where
//! the signature is the first 16 hex characters of
//! `HMAC-SHA256(secret, "<subject>.<expires_at_ms>")`. Nothing is stored
//! server-side; expiry and secret rotation are the only ways a token dies.

pub mod codec;
pub mod secret;
pub mod subject;

pub use codec::{TokenCodec, VerifiedToken};
pub use secret::PreviewSecret;
pub use subject::SubjectId;

use thiserror::Error;

/// Field delimiter of the token wire format.
pub const DELIMITER: char = '.';

/// Number of hex characters of the MAC kept in the token (64 bits).
pub const SIGNATURE_HEX_LEN: usize = 16;

/// Errors raised while issuing a token.
///
/// Verification never produces an error; it returns `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The subject identifier is empty, too long, or contains characters
    /// outside `[A-Za-z0-9_-]`.
    #[error("invalid preview subject: {0}")]
    InvalidSubject(&'static str),
    /// The secret is empty.
    #[error("preview secret must not be empty")]
    EmptySecret,
}

impl From<TokenError> for folio_core::AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidSubject(_) => folio_core::AppError::validation(err.to_string()),
            TokenError::EmptySecret => folio_core::AppError::configuration(err.to_string()),
        }
    }
}
