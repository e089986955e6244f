//! Validated subject identifiers.

use std::fmt;

use super::TokenError;

/// Maximum length of a subject identifier.
pub const MAX_SUBJECT_LEN: usize = 128;

/// Identifier of the resource a preview token unlocks.
///
/// Restricted to `[A-Za-z0-9_-]` so it can never contain the token
/// delimiter and is safe in URL paths and query strings without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectId(String);

impl SubjectId {
    /// Validates and wraps a subject identifier.
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        if raw.is_empty() {
            return Err(TokenError::InvalidSubject("empty"));
        }
        if raw.len() > MAX_SUBJECT_LEN {
            return Err(TokenError::InvalidSubject("too long"));
        }
        if !raw.bytes().all(is_subject_byte) {
            return Err(TokenError::InvalidSubject(
                "only letters, digits, '_' and '-' are allowed",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SubjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_subject_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}
