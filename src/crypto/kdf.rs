//! Password-based key derivation.
//!
//! PBKDF2-HMAC-SHA-256 with 600,000 iterations, producing a 256-bit key.
//! Derivation is deterministic: the same (password, salt) pair always yields
//! the same key, which is what makes decryption possible at all.
//!
//! This is the slow step of every operation, so it owns a progress sub-range:
//! callers receive an inner 0.1 right after dispatch and an inner 1.0 on
//! completion, and map those into their own overall range.

use hmac::Hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::config::{KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
use crate::error::{CryptoResult, Error};

/// A derived AES-256 key, zeroized on drop.
///
/// Scoped to a single encrypt/decrypt call and never serialized.
pub type DerivedKey = Zeroizing<[u8; KEY_SIZE]>;

/// Derives a 256-bit key from a password and salt.
///
/// Empty passwords are accepted here; password policy belongs to the caller,
/// not the key-derivation layer.
///
/// # Errors
///
/// [`Error::KeyDerivation`] if the PBKDF2 primitive rejects its input.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_SIZE], on_progress: &mut dyn FnMut(f64)) -> CryptoResult<DerivedKey> {
    derive_with_iterations(password, salt, PBKDF2_ITERATIONS, on_progress)
}

fn derive_with_iterations(password: &[u8], salt: &[u8], iterations: u32, on_progress: &mut dyn FnMut(f64)) -> CryptoResult<DerivedKey> {
    on_progress(0.1);

    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut key[..])
        .map_err(|e| Error::KeyDerivation(format!("pbkdf2 rejected input: {e}")))?;

    on_progress(1.0);

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Full-strength derivation is exercised by the processor tests; these
    // use a small iteration count to keep the unit suite fast.
    const TEST_ITERATIONS: u32 = 1_000;

    #[test]
    fn test_deterministic() {
        let salt = [7u8; SALT_SIZE];
        let mut noop = |_| {};
        let a = derive_with_iterations(b"hunter2", &salt, TEST_ITERATIONS, &mut noop).unwrap();
        let b = derive_with_iterations(b"hunter2", &salt, TEST_ITERATIONS, &mut noop).unwrap();
        assert_eq!(*a, *b);
    }

    #[test]
    fn test_salt_changes_key() {
        let mut noop = |_| {};
        let a = derive_with_iterations(b"hunter2", &[1u8; SALT_SIZE], TEST_ITERATIONS, &mut noop).unwrap();
        let b = derive_with_iterations(b"hunter2", &[2u8; SALT_SIZE], TEST_ITERATIONS, &mut noop).unwrap();
        assert_ne!(*a, *b);
    }

    #[test]
    fn test_password_changes_key() {
        let salt = [7u8; SALT_SIZE];
        let mut noop = |_| {};
        let a = derive_with_iterations(b"hunter2", &salt, TEST_ITERATIONS, &mut noop).unwrap();
        let b = derive_with_iterations(b"hunter3", &salt, TEST_ITERATIONS, &mut noop).unwrap();
        assert_ne!(*a, *b);
    }

    #[test]
    fn test_empty_password_accepted() {
        let salt = [7u8; SALT_SIZE];
        let mut noop = |_| {};
        assert!(derive_with_iterations(b"", &salt, TEST_ITERATIONS, &mut noop).is_ok());
    }

    #[test]
    fn test_progress_near_start_and_completion() {
        let salt = [7u8; SALT_SIZE];
        let mut seen = Vec::new();
        derive_with_iterations(b"pw", &salt, TEST_ITERATIONS, &mut |p| seen.push(p)).unwrap();
        assert_eq!(seen, vec![0.1, 1.0]);
    }
}
