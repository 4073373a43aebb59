//! File reading, writing, and output-name derivation.
//!
//! The engine works on whole in-memory buffers, so reads are bounded by
//! [`MAX_FILE_SIZE`] and refused beyond it rather than streamed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bytesize::ByteSize;
use tracing::warn;

use crate::config::{MAX_FILE_SIZE, SUFFIX_MARKER, WARNING_FILE_SIZE};
use crate::types::{FileInfo, ProcessorMode};

/// Reads a whole file into memory, enforcing the size cap.
pub async fn read_file(path: &Path) -> Result<Vec<u8>> {
    let meta = tokio::fs::metadata(path).await.with_context(|| format!("cannot stat: {}", path.display()))?;

    if meta.len() > MAX_FILE_SIZE {
        bail!("{} exceeds the maximum file size of {}", path.display(), ByteSize::b(MAX_FILE_SIZE));
    }
    if meta.len() > WARNING_FILE_SIZE {
        warn!(path = %path.display(), size = meta.len(), "loading a large file into memory");
    }

    tokio::fs::read(path).await.with_context(|| format!("failed to read file: {}", path.display()))
}

/// Writes the output bytes, creating parent directories as needed.
pub async fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    tokio::fs::write(path, bytes).await.with_context(|| format!("failed to write file: {}", path.display()))
}

/// Inserts the `.encrypted` marker before the final extension:
/// `report.pdf` -> `report.encrypted.pdf`, `notes` -> `notes.encrypted`.
#[must_use]
pub fn encrypted_filename(name: &str) -> String {
    match name.rfind('.').filter(|&i| i > 0) {
        Some(i) => format!("{}{}{}", &name[..i], SUFFIX_MARKER, &name[i..]),
        None => format!("{name}{SUFFIX_MARKER}"),
    }
}

/// Strips the `.encrypted` marker if present; otherwise returns the name
/// unchanged.
#[must_use]
pub fn decrypted_filename(name: &str) -> String {
    // Extensionless inputs carry the marker at the very end.
    if let Some(stripped) = name.strip_suffix(SUFFIX_MARKER).filter(|s| !s.is_empty()) {
        return stripped.to_string();
    }

    let (stem, extension) = match name.rfind('.').filter(|&i| i > 0) {
        Some(i) => (&name[..i], &name[i..]),
        None => (name, ""),
    };

    match stem.strip_suffix(SUFFIX_MARKER) {
        Some(stripped) => format!("{stripped}{extension}"),
        None => name.to_string(),
    }
}

/// Derives the suggested output path for a processing mode.
#[must_use]
pub fn output_path(input: &Path, mode: ProcessorMode) -> PathBuf {
    let name = input.file_name().map_or_else(|| input.to_string_lossy().into_owned(), |n| n.to_string_lossy().into_owned());

    let out_name = match mode {
        ProcessorMode::Encrypt => encrypted_filename(&name),
        ProcessorMode::Decrypt => decrypted_filename(&name),
    };

    input.with_file_name(out_name)
}

/// Whether a filename carries the `.encrypted` marker.
#[must_use]
pub fn is_encrypted_file(path: &Path) -> bool {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    decrypted_filename(&name) != name
}

/// Stats a file for the interactive table; `None` if it no longer exists.
pub fn file_info(path: &Path) -> Result<Option<FileInfo>> {
    let meta = match std::fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("stat failed: {}", path.display())),
    };

    Ok(Some(FileInfo { path: path.to_path_buf(), size: meta.len(), is_encrypted: is_encrypted_file(path) }))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_encrypted_filename() {
        assert_eq!(encrypted_filename("report.pdf"), "report.encrypted.pdf");
        assert_eq!(encrypted_filename("archive.tar.gz"), "archive.tar.encrypted.gz");
        assert_eq!(encrypted_filename("notes"), "notes.encrypted");
        assert_eq!(encrypted_filename(".bashrc"), ".bashrc.encrypted");
    }

    #[test]
    fn test_decrypted_filename() {
        assert_eq!(decrypted_filename("report.encrypted.pdf"), "report.pdf");
        assert_eq!(decrypted_filename("notes.encrypted"), "notes");
        assert_eq!(decrypted_filename("report.pdf"), "report.pdf");
        assert_eq!(decrypted_filename("notes"), "notes");
    }

    #[test]
    fn test_suffix_roundtrip() {
        for name in ["report.pdf", "archive.tar.gz", "notes"] {
            assert_eq!(decrypted_filename(&encrypted_filename(name)), name);
        }
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(Path::new("docs/report.pdf"), ProcessorMode::Encrypt), PathBuf::from("docs/report.encrypted.pdf"));
        assert_eq!(output_path(Path::new("docs/report.encrypted.pdf"), ProcessorMode::Decrypt), PathBuf::from("docs/report.pdf"));
    }

    #[test]
    fn test_is_encrypted_file() {
        assert!(is_encrypted_file(Path::new("file.encrypted.txt")));
        assert!(is_encrypted_file(Path::new("file.encrypted")));
        assert!(!is_encrypted_file(Path::new("file.txt")));
        assert!(!is_encrypted_file(Path::new("file")));
    }

    #[tokio::test]
    async fn test_write_and_read_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.bin");

        write_file(&path, b"container bytes").await.unwrap();
        assert_eq!(read_file(&path).await.unwrap(), b"container bytes");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_file(&dir.path().join("absent")).await.is_err());
    }
}
