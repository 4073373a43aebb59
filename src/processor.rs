//! Encryption and decryption pipelines.
//!
//! Each call is one sequential, self-contained operation over an in-memory
//! buffer, reporting progress through a caller-supplied callback and ending
//! in exactly one terminal outcome. The progress values form a fixed
//! contract shared with the file format:
//!
//! - 0.0 at start
//! - 0.1 once the salt/nonce are ready (encrypt) or the container parsed (decrypt)
//! - 0.1 + inner * 0.3 while the key derives (so 0.13 at dispatch, 0.4 done)
//! - 0.4 once the key is ready
//! - 1.0 on success
//!
//! Key derivation dominates the latency, which is why it owns the widest
//! sub-range.

use tracing::debug;

use crate::container::Container;
use crate::crypto::{self, AesGcm};
use crate::error::{CryptoResult, Error};
use crate::secret::Password;

/// Progress callback: strictly non-decreasing fractions in `[0, 1]`.
pub type ProgressFn<'a> = &'a mut dyn FnMut(f64);

pub struct Processor {
    password: Password,
}

impl Processor {
    #[must_use]
    pub fn new(password: Password) -> Self {
        Self { password }
    }

    /// Encrypts a plaintext buffer into container bytes.
    ///
    /// Generates a fresh salt and nonce, derives the key, seals the buffer,
    /// and frames the result. Producing the returned bytes is the only side
    /// effect; writing them anywhere is the caller's job.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedEnvironment`] if secure randomness or the cipher
    /// is unavailable, [`Error::KeyDerivation`] if the KDF rejects input.
    pub fn encrypt(&self, plaintext: &[u8], on_progress: ProgressFn<'_>) -> CryptoResult<Vec<u8>> {
        on_progress(0.0);

        let salt = crypto::generate_salt()?;
        let nonce = crypto::generate_nonce()?;
        on_progress(0.1);

        let key = crypto::derive_key(self.password.expose_secret().as_bytes(), &salt, &mut |inner| {
            on_progress(0.1 + inner * 0.3);
        })?;
        on_progress(0.4);

        let ciphertext = AesGcm::new(&key)?.seal(&nonce, plaintext)?;
        let out = Container { salt, nonce, ciphertext }.encode();

        debug!(input_len = plaintext.len(), output_len = out.len(), "encryption complete");
        on_progress(1.0);

        Ok(out)
    }

    /// Decrypts container bytes back into the original plaintext.
    ///
    /// A structural failure (container too small) terminates immediately,
    /// before key derivation runs. After that point, key-derivation failure
    /// and tag-verification failure both surface as
    /// [`Error::Authentication`]: the caller cannot tell a wrong password
    /// from tampered bytes, by design.
    pub fn decrypt(&self, container: &[u8], on_progress: ProgressFn<'_>) -> CryptoResult<Vec<u8>> {
        on_progress(0.0);

        let parsed = Container::decode(container)?;
        on_progress(0.1);

        // The key must come from exactly the salt embedded in this container.
        let key = crypto::derive_key(self.password.expose_secret().as_bytes(), &parsed.salt, &mut |inner| {
            on_progress(0.1 + inner * 0.3);
        })
        .map_err(|_| Error::Authentication)?;
        on_progress(0.4);

        let plaintext = AesGcm::new(&key)?.open(&parsed.nonce, &parsed.ciphertext).inspect_err(|_| {
            debug!("authentication failed");
        })?;

        debug!(output_len = plaintext.len(), "decryption complete");
        on_progress(1.0);

        Ok(plaintext)
    }
}
