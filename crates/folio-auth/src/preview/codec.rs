//! Issuing and verifying preview tokens.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use super::secret::PreviewSecret;
use super::subject::SubjectId;
use super::{DELIMITER, SIGNATURE_HEX_LEN, TokenError};

type HmacSha256 = Hmac<Sha256>;

/// Upper bound on the length of a token accepted by [`TokenCodec::verify`].
/// Anything longer cannot have been issued by this codec.
pub const MAX_TOKEN_LEN: usize = 1024;

/// Default token lifetime.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Creates and validates signed, expiring preview tokens.
///
/// The codec is immutable and holds no shared mutable state; share it as
/// `Arc<TokenCodec>` and call it from any number of tasks.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC keyed with the signing secret, cloned for every signature.
    mac: HmacSha256,
    ttl_ms: u64,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl_ms", &self.ttl_ms)
            .finish_non_exhaustive()
    }
}

/// A freshly issued token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    token: String,
    expires_at_ms: u64,
}

impl IssuedToken {
    /// Wire form of the token.
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Consumes the wrapper, returning the wire form.
    pub fn into_string(self) -> String {
        self.token
    }

    /// Absolute expiry in milliseconds since the Unix epoch.
    pub fn expires_at_ms(&self) -> u64 {
        self.expires_at_ms
    }

    /// Absolute expiry as a timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.expires_at_ms)
    }
}

impl fmt::Display for IssuedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// The authenticated content of a token that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    subject_id: String,
    expires_at_ms: u64,
}

impl VerifiedToken {
    /// The subject the token was issued for.
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Absolute expiry in milliseconds since the Unix epoch.
    pub fn expires_at_ms(&self) -> u64 {
        self.expires_at_ms
    }

    /// Absolute expiry as a timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.expires_at_ms)
    }

    /// Whether the token unlocks the requested subject. Exact match only.
    pub fn grants(&self, requested: &str) -> bool {
        self.subject_id == requested
    }
}

impl TokenCodec {
    /// Creates a codec with the given secret and token lifetime.
    pub fn new(secret: &PreviewSecret, ttl: Duration) -> Result<Self, TokenError> {
        let mac =
            HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| TokenError::EmptySecret)?;
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        Ok(Self { mac, ttl_ms })
    }

    /// Creates a codec with the default ten minute lifetime.
    pub fn with_default_ttl(secret: &PreviewSecret) -> Result<Self, TokenError> {
        Self::new(secret, DEFAULT_TTL)
    }

    /// Token lifetime.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Issues a token for `subject`, expiring one TTL from now.
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        self.issue_at(subject, now_ms())
    }

    /// Issues a token as if the current time were `now_ms`.
    pub fn issue_at(&self, subject: &str, now_ms: u64) -> Result<IssuedToken, TokenError> {
        let subject = SubjectId::parse(subject)?;
        let expires_at_ms = now_ms.saturating_add(self.ttl_ms);
        let payload = format!("{}{DELIMITER}{expires_at_ms}", subject.as_str());
        let signature = self.sign(&payload);

        Ok(IssuedToken {
            token: format!("{payload}{DELIMITER}{signature}"),
            expires_at_ms,
        })
    }

    /// Verifies an untrusted token against the current time.
    ///
    /// Returns `None` for malformed, expired, and forged tokens alike.
    pub fn verify(&self, token: &str) -> Option<VerifiedToken> {
        self.verify_at(token, now_ms())
    }

    /// Verifies an untrusted token as if the current time were `now_ms`.
    ///
    /// A token is still valid at exactly its expiry instant and invalid one
    /// millisecond later.
    pub fn verify_at(&self, token: &str, now_ms: u64) -> Option<VerifiedToken> {
        if token.len() > MAX_TOKEN_LEN {
            debug!(reason = "oversized", "Preview token rejected");
            return None;
        }

        let mut parts = token.split(DELIMITER);
        let (Some(subject), Some(expiry), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            debug!(reason = "malformed", "Preview token rejected");
            return None;
        };

        let Some(expires_at_ms) = parse_expiry(expiry) else {
            debug!(reason = "malformed", "Preview token rejected");
            return None;
        };

        if now_ms > expires_at_ms {
            debug!(reason = "expired", "Preview token rejected");
            return None;
        }

        let expected = self.sign(&format!("{subject}{DELIMITER}{expiry}"));
        if !bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
            debug!(reason = "signature", "Preview token rejected");
            return None;
        }

        Some(VerifiedToken {
            subject_id: subject.to_string(),
            expires_at_ms,
        })
    }

    /// Truncated hex HMAC-SHA256 of `payload`.
    fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        let digest = mac.finalize().into_bytes();
        hex::encode(&digest[..SIGNATURE_HEX_LEN / 2])
    }
}

/// Parses the expiry field, accepting ASCII digits only (no sign, no
/// whitespace) so every expiry has exactly one encoding.
fn parse_expiry(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn now_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

fn millis_to_datetime(ms: u64) -> DateTime<Utc> {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
