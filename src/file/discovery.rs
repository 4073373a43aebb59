//! File discovery for the interactive wizard.
//!
//! Walks a directory tree and keeps files eligible for the selected mode:
//! plain files for encryption, `.encrypted` ones for decryption. Dotfiles
//! and the excluded patterns are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::EXCLUDED_PATTERNS;
use crate::file::operations::is_encrypted_file;
use crate::types::ProcessorMode;

pub fn find_eligible_files(root: &Path, mode: ProcessorMode) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk(root, &mut |path| {
        if is_eligible(path, mode) {
            files.push(path.to_path_buf());
        }
    });
    files
}

fn walk(dir: &Path, callback: &mut impl FnMut(&Path)) {
    // Unreadable directories are silently skipped.
    let Ok(entries) = fs::read_dir(dir) else { return };

    for entry in entries.flatten() {
        let path = entry.path();
        if is_excluded(&path) {
            continue;
        }
        if path.is_dir() {
            walk(&path, callback);
        } else {
            callback(&path);
        }
    }
}

fn is_excluded(path: &Path) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return true;
    };

    name.starts_with('.') || EXCLUDED_PATTERNS.contains(&name.as_ref())
}

fn is_eligible(path: &Path, mode: ProcessorMode) -> bool {
    match mode {
        ProcessorMode::Encrypt => !is_encrypted_file(path),
        ProcessorMode::Decrypt => is_encrypted_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_eligible() {
        assert!(is_eligible(Path::new("document.txt"), ProcessorMode::Encrypt));
        assert!(!is_eligible(Path::new("document.encrypted.txt"), ProcessorMode::Encrypt));
        assert!(is_eligible(Path::new("document.encrypted.txt"), ProcessorMode::Decrypt));
        assert!(!is_eligible(Path::new("document.txt"), ProcessorMode::Decrypt));
    }

    #[test]
    fn test_excluded_patterns() {
        assert!(is_excluded(Path::new("node_modules")));
        assert!(is_excluded(Path::new(".git")));
        assert!(is_excluded(Path::new(".hidden")));
        assert!(!is_excluded(Path::new("document.txt")));
    }

    #[test]
    fn test_discovery() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plain.txt"), b"x").unwrap();
        std::fs::write(dir.path().join("secret.encrypted.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("node_modules")).unwrap();
        std::fs::write(dir.path().join("node_modules/skipped.txt"), b"x").unwrap();

        let encrypt_candidates = find_eligible_files(dir.path(), ProcessorMode::Encrypt);
        let decrypt_candidates = find_eligible_files(dir.path(), ProcessorMode::Decrypt);

        assert_eq!(encrypt_candidates.len(), 1);
        assert!(encrypt_candidates[0].ends_with("plain.txt"));
        assert_eq!(decrypt_candidates.len(), 1);
        assert!(decrypt_candidates[0].ends_with("secret.encrypted.txt"));
    }
}
