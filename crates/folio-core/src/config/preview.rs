//! Preview token configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Minimum accepted length of the preview signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Settings for signed preview links.
#[derive(Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// HMAC-SHA256 signing secret. Required; also read from
    /// `PREVIEW_TOKEN_SECRET`.
    #[serde(default, skip_serializing)]
    pub secret: Option<String>,
    /// Token lifetime in minutes.
    #[serde(default = "default_ttl")]
    pub ttl_minutes: u64,
    /// Bearer key required to mint preview links over HTTP. The issuance
    /// endpoint is disabled when unset.
    #[serde(default, skip_serializing)]
    pub issuer_key: Option<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl_minutes: default_ttl(),
            issuer_key: None,
        }
    }
}

impl fmt::Debug for PreviewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("ttl_minutes", &self.ttl_minutes)
            .field("issuer_key", &self.issuer_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl PreviewConfig {
    /// Token lifetime as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_minutes.saturating_mul(60))
    }

    /// Returns the configured secret or fails if it is missing or too short.
    pub fn require_secret(&self) -> Result<&str, AppError> {
        let secret = self
            .secret
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                AppError::configuration(
                    "preview.secret is not set (set PREVIEW_TOKEN_SECRET or FOLIO__PREVIEW__SECRET)",
                )
            })?;

        if secret.len() < MIN_SECRET_LEN {
            return Err(AppError::configuration(format!(
                "preview.secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        Ok(secret)
    }

    /// Issuer key, treating an empty string as unset.
    pub fn issuer_key(&self) -> Option<&str> {
        self.issuer_key.as_deref().filter(|k| !k.is_empty())
    }

    pub(crate) fn validate(&self) -> Result<(), AppError> {
        self.require_secret()?;
        if self.ttl_minutes == 0 {
            return Err(AppError::configuration(
                "preview.ttl_minutes must be greater than zero",
            ));
        }
        Ok(())
    }
}

fn default_ttl() -> u64 {
    10
}
