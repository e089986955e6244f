//! The process-wide signing secret.

use std::fmt;

use folio_core::config::PreviewConfig;

use super::TokenError;

/// HMAC key used to sign preview tokens.
///
/// Loaded once at startup and injected into [`TokenCodec`](super::TokenCodec).
/// The bytes never appear in `Debug` output.
#[derive(Clone)]
pub struct PreviewSecret(Vec<u8>);

impl PreviewSecret {
    /// Wraps raw key bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, TokenError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        Ok(Self(bytes))
    }

    /// Builds the secret from configuration, failing when it is absent.
    pub fn from_config(config: &PreviewConfig) -> folio_core::AppResult<Self> {
        let secret = config.require_secret()?;
        Ok(Self::new(secret.as_bytes())?)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PreviewSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewSecret").field(&"<redacted>").finish()
    }
}
