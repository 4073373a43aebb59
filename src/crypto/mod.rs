//! Cryptographic primitives: secure randomness, key derivation, and the
//! AES-256-GCM wrapper.
//!
//! These are the leaves of the pipeline. None of them knows about the
//! container layout or progress mapping; that orchestration lives in
//! [`crate::processor`].

pub mod aes_gcm;
pub mod kdf;
pub mod rng;

pub use aes_gcm::AesGcm;
pub use kdf::derive_key;
pub use rng::{generate_nonce, generate_salt};
