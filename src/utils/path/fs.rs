//! Filesystem probes.
//!
//! Each probe performs a single metadata query (`stat`) and never fails:
//! a missing path, a permission error or the wrong file type all read as
//! `false`.

use std::{fs, path::Path};

/// Check whether `path` exists and names a directory.
///
/// # Example
/// ```
/// use pathparts::utils::path::is_directory;
/// assert!(is_directory(std::env::temp_dir()));
/// assert!(!is_directory("definitely/not/here"));
/// ```
#[inline]
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Check whether `path` exists and names a regular file.
#[inline]
pub fn is_regular_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_directory() {
        let dir = TempDir::new().unwrap();
        assert!(is_directory(dir.path()));
        assert!(!is_regular_file(dir.path()));
    }

    #[test]
    fn test_probe_regular_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dog.txt");
        fs::write(&path, "woof").unwrap();

        assert!(is_regular_file(&path));
        assert!(!is_directory(&path));
    }

    #[test]
    fn test_probe_missing_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        assert!(!is_regular_file(&path));
        assert!(!is_directory(&path));
    }

    #[test]
    fn test_probe_empty_path() {
        assert!(!is_regular_file(""));
        assert!(!is_directory(""));
    }
}
