//! # folio-auth
//!
//! Authorization primitives for Folio.
//!
//! ## Modules
//!
//! - `preview` — stateless HMAC-signed preview tokens bound to one subject
//! - `key` — constant-time comparison of static bearer keys

pub mod key;
pub mod preview;

pub use key::BearerKey;
pub use preview::{PreviewSecret, SubjectId, TokenCodec, TokenError, VerifiedToken};
