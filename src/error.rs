//! Core error taxonomy.
//!
//! Every pipeline invocation ends in success or exactly one of these kinds.
//! [`Error::Authentication`] deliberately carries a single generic message:
//! a wrong password, a tampered container, and a corrupted nonce are
//! indistinguishable by construction, and the error surface must not create
//! an oracle separating them.

use thiserror::Error;

use crate::config::MIN_CONTAINER_SIZE;

pub type CryptoResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The container is structurally invalid. Detected before any
    /// cryptographic work; the message names the minimum expected size.
    #[error("invalid encrypted file: expected at least {MIN_CONTAINER_SIZE} bytes, got {len}")]
    Validation { len: usize },

    /// The key-derivation primitive rejected its input or is unavailable.
    /// Environment-fatal; retrying with the same inputs cannot succeed.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// AEAD tag verification failed. Conflates wrong password and tampering.
    #[error("invalid password or file has been tampered with")]
    Authentication,

    /// No secure randomness source or cipher primitive is available.
    #[error("unsupported environment: {0}")]
    UnsupportedEnvironment(String),
}
