//! Secure random salt and nonce generation.

use rand::rand_core::TryRng;
use rand::rngs::SysRng;

use crate::config::{NONCE_SIZE, SALT_SIZE};
use crate::error::{CryptoResult, Error};

/// Generates a fresh 32-byte salt for key derivation.
///
/// Salts are not secret; they defeat precomputed-dictionary attacks and are
/// stored in the clear at the front of the container.
#[inline]
pub fn generate_salt() -> CryptoResult<[u8; SALT_SIZE]> {
    fill_random()
}

/// Generates a fresh 12-byte AES-GCM nonce.
///
/// Must never repeat under the same key; generating it randomly alongside a
/// fresh random salt makes reuse a non-issue in practice.
#[inline]
pub fn generate_nonce() -> CryptoResult<[u8; NONCE_SIZE]> {
    fill_random()
}

fn fill_random<const N: usize>() -> CryptoResult<[u8; N]> {
    let mut bytes = [0u8; N];
    SysRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| Error::UnsupportedEnvironment(format!("secure rng unavailable: {e}")))?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_and_nonce_sizes() {
        assert_eq!(generate_salt().unwrap().len(), 32);
        assert_eq!(generate_nonce().unwrap().len(), 12);
    }

    #[test]
    fn test_independent_across_calls() {
        // Collisions of 32 random bytes are astronomically unlikely.
        assert_ne!(generate_salt().unwrap(), generate_salt().unwrap());
        assert_ne!(generate_nonce().unwrap(), generate_nonce().unwrap());
    }
}
