//! Common type definitions.

use std::fmt::{Display, Formatter, Result};
use std::path::PathBuf;

/// The kind of file operation to perform.
///
/// Used to filter files during discovery and derive output names.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProcessorMode {
    Encrypt,
    Decrypt,
}

impl ProcessorMode {
    /// All modes, for interactive selection.
    pub const ALL: &'static [Self] = &[Self::Encrypt, Self::Decrypt];

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypt",
            Self::Decrypt => "Decrypt",
        }
    }
}

impl Display for ProcessorMode {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// An operation in progress, with display labels for progress bars.
#[derive(Clone, Copy)]
pub enum Processing {
    Encryption,
    Decryption,
}

impl Processing {
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encryption => "Encrypting...",
            Self::Decryption => "Decrypting...",
        }
    }

    #[inline]
    pub fn mode(self) -> ProcessorMode {
        match self {
            Self::Encryption => ProcessorMode::Encrypt,
            Self::Decryption => ProcessorMode::Decrypt,
        }
    }
}

impl Display for Processing {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            Self::Encryption => "encryption",
            Self::Decryption => "decryption",
        })
    }
}

/// Metadata about a discovered file, shown in the interactive table.
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
    pub is_encrypted: bool,
}
