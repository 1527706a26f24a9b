//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// An absolute `config_name` is returned as-is when it exists. Otherwise each
/// ancestor of `start` is tried in turn, nearest first.
///
/// # Example
/// ```text
/// /home/user/project/src/  ← start
/// /home/user/project/pathparts.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_start_dir() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("pathparts.toml");
        fs::write(&config, "").unwrap();

        let found = find_config_file(Path::new("pathparts.toml"), dir.path());
        assert_eq!(found, Some(config));
    }

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("pathparts.toml");
        fs::write(&config, "").unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(Path::new("pathparts.toml"), &nested);
        assert_eq!(found, Some(config));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("custom.toml");

        assert_eq!(find_config_file(&config, dir.path()), None);

        fs::write(&config, "").unwrap();
        assert_eq!(find_config_file(&config, dir.path()), Some(config));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("not-a-config.toml")).unwrap();

        let found = find_config_file(Path::new("not-a-config.toml"), dir.path());
        assert_ne!(found, Some(dir.path().join("not-a-config.toml")));

        // Absolute paths naming a directory are skipped too
        assert_eq!(find_config_file(dir.path(), dir.path()), None);
    }
}
