//! Global configuration constants.
//!
//! Cryptographic parameters, the container layout, and file-handling limits.
//! The container format is fixed and carries no version byte; changing any of
//! these sizes breaks compatibility with existing encrypted files.

/// Application name used in user interfaces.
pub const APP_NAME: &str = "ByteLock";

/// Marker inserted before the file extension of encrypted output.
///
/// `report.pdf` becomes `report.encrypted.pdf`; decryption strips the marker.
pub const SUFFIX_MARKER: &str = ".encrypted";

/// Salt length in bytes (256 bits).
///
/// A fresh salt is generated for every encryption so identical passwords
/// never derive the same key twice. Salts are not secret and are stored at
/// the front of the container.
pub const SALT_SIZE: usize = 32;

/// AES-GCM nonce length in bytes (96 bits, the recommended GCM size).
///
/// Generated fresh per encryption; must never repeat under the same key.
pub const NONCE_SIZE: usize = 12;

/// GCM authentication tag length in bytes (128 bits).
pub const TAG_SIZE: usize = 16;

/// Derived key length in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// PBKDF2-HMAC-SHA-256 iteration count.
///
/// OWASP 2024+ recommendation. This is the dominant latency of every
/// operation, which is why key derivation owns a progress sub-range.
pub const PBKDF2_ITERATIONS: u32 = 600_000;

/// Smallest structurally valid container: salt + nonce + tag of an empty
/// plaintext. Anything shorter is rejected before any cryptographic work.
pub const MIN_CONTAINER_SIZE: usize = SALT_SIZE + NONCE_SIZE + TAG_SIZE;

/// Hard limit on input file size (1 GiB).
///
/// The engine operates on whole in-memory buffers; there is no streaming
/// mode, so oversized inputs are refused up front.
pub const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Above this size (100 MiB) the interactive mode asks for confirmation
/// before loading the file into memory.
pub const WARNING_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// File and directory names excluded from interactive discovery.
///
/// Keeps build artifacts, VCS metadata, and key material out of the file
/// picker so users don't encrypt something the system depends on.
pub const EXCLUDED_PATTERNS: &[&str] = &[
    "target",
    "vendor",
    "node_modules",
    ".git",
    ".github",
    ".config",
    ".local",
    ".cache",
    ".ssh",
    ".gnupg",
];
