//! Path decomposition error types.

use thiserror::Error;

/// Errors produced by the path utilities.
///
/// Probes never produce these: they fold every failure into `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path does not exist or does not name a regular file.
    #[error("`{0}` does not exist or is not a regular file")]
    NotAFile(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PathError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_file_display() {
        let err = PathError::NotAFile("missing/dog.txt".to_string());
        let display = err.to_string();
        assert!(display.contains("missing/dog.txt"));
        assert!(display.contains("not a regular file"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = PathError::invalid_argument("directory must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid argument: directory must not be empty"
        );
    }
}
