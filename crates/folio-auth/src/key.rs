//! Static bearer key checks.

use std::fmt;

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// A configured bearer key, compared in constant time.
///
/// Both sides are hashed before comparison so the check also hides the
/// expected key's length.
#[derive(Clone)]
pub struct BearerKey {
    digest: [u8; 32],
}

impl BearerKey {
    /// Wraps a configured key.
    pub fn new(key: &str) -> Self {
        Self {
            digest: Sha256::digest(key.as_bytes()).into(),
        }
    }

    /// Whether `candidate` equals the configured key.
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();
        self.digest[..].ct_eq(&candidate[..]).into()
    }

    /// Checks an `Authorization` header value of the form `Bearer <key>`.
    pub fn matches_header(&self, header: &str) -> bool {
        header
            .strip_prefix("Bearer ")
            .is_some_and(|candidate| self.matches(candidate.trim()))
    }
}

impl fmt::Debug for BearerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerKey(<redacted>)")
    }
}
