//! AES-256-GCM with an explicit caller-supplied nonce.
//!
//! The nonce is stored in the container alongside the salt, so unlike
//! nonce-prepending designs the cipher here never generates or frames its
//! own nonce. Sealing appends a 16-byte authentication tag; opening verifies
//! it and yields a single undifferentiated failure when it doesn't check out.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::config::{KEY_SIZE, NONCE_SIZE};
use crate::error::{CryptoResult, Error};

pub struct AesGcm {
    inner: Aes256Gcm,
}

impl AesGcm {
    pub fn new(key: &[u8; KEY_SIZE]) -> CryptoResult<Self> {
        let inner = Aes256Gcm::new_from_slice(key).map_err(|e| Error::UnsupportedEnvironment(format!("aes-256-gcm init failed: {e}")))?;
        Ok(Self { inner })
    }

    /// Encrypts the whole buffer at once, returning ciphertext with the tag
    /// appended. Empty plaintext is valid and produces a tag-only output.
    pub fn seal(&self, nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
        self.inner
            .encrypt(Nonce::from_slice(nonce), plaintext)
            .map_err(|_| Error::UnsupportedEnvironment("aes-256-gcm encryption failed".into()))
    }

    /// Decrypts and authenticates. A failed tag check does not reveal
    /// whether the key, the nonce, or the bytes were wrong.
    pub fn open(&self, nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
        self.inner.decrypt(Nonce::from_slice(nonce), ciphertext).map_err(|_| Error::Authentication)
    }
}
