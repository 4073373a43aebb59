//! The encrypted-file container codec.
//!
//! Layout, bit-exact and versionless:
//!
//! ```text
//! offset 0..32   salt
//! offset 32..44  nonce
//! offset 44..    AES-256-GCM ciphertext with 16-byte tag appended
//! ```
//!
//! There are no length prefixes: salt and nonce are fixed-size, the
//! ciphertext occupies the remainder. Decoding only checks structure; the
//! content is authenticated solely by the subsequent AEAD open.

use crate::config::{MIN_CONTAINER_SIZE, NONCE_SIZE, SALT_SIZE};
use crate::error::{CryptoResult, Error};

pub struct Container {
    pub salt: [u8; SALT_SIZE],
    pub nonce: [u8; NONCE_SIZE],
    pub ciphertext: Vec<u8>,
}

impl Container {
    /// Serializes by pure concatenation.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + self.ciphertext.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Deserializes by positional slicing.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the buffer is shorter than the 60-byte
    /// minimum (salt + nonce + tag of an empty plaintext).
    pub fn decode(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() < MIN_CONTAINER_SIZE {
            return Err(Error::Validation { len: bytes.len() });
        }

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&bytes[..SALT_SIZE]);

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[SALT_SIZE..SALT_SIZE + NONCE_SIZE]);

        Ok(Self { salt, nonce, ciphertext: bytes[SALT_SIZE + NONCE_SIZE..].to_vec() })
    }
}
