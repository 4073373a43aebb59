//! ByteLock - Password-based file encryption.
//!
//! A small, careful file encryption tool that uses:
//! - AES-256-GCM for authenticated encryption
//! - PBKDF2-HMAC-SHA-256 (600,000 iterations) for key derivation
//! - A fixed, self-describing container: `[salt(32)][nonce(12)][ciphertext+tag]`
//!
//! Every encrypt/decrypt call is a single, self-contained operation that
//! reports fractional progress and ends in exactly one terminal outcome.

pub mod app;
pub mod config;
pub mod container;
pub mod crypto;
pub mod error;
pub mod file;
pub mod password;
pub mod processor;
pub mod secret;
pub mod types;
pub mod ui;
pub mod worker;
