//! Directory + file name joining.

use super::Separator;
use crate::error::PathError;

/// Join `directory` and `name` with exactly one separator between them.
///
/// Trailing separators on `directory` are trimmed first, so `path/` and
/// `path` give the same result. A directory made only of separators (the
/// root) keeps a single one.
///
/// # Errors
/// [`PathError::InvalidArgument`] if `directory` is empty.
///
/// # Example
/// ```
/// use pathparts::utils::path::{Separator, join_path};
/// let joined = join_path("path/", "dog.txt", Separator::UNIX).unwrap();
/// assert_eq!(joined, "path/dog.txt");
/// ```
pub fn join_path(directory: &str, name: &str, separator: Separator) -> Result<String, PathError> {
    if directory.is_empty() {
        return Err(PathError::invalid_argument("directory must not be empty"));
    }

    let sep = separator.as_char();
    let directory = directory.trim_end_matches(sep);

    let mut joined = String::with_capacity(directory.len() + separator.len_utf8() + name.len());
    joined.push_str(directory);
    joined.push(sep);
    joined.push_str(name);
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_with_trailing_separator() {
        assert_eq!(
            join_path("path/", "dog.txt", Separator::UNIX).unwrap(),
            "path/dog.txt"
        );
    }

    #[test]
    fn test_join_without_trailing_separator() {
        assert_eq!(
            join_path("path", "dog.txt", Separator::UNIX).unwrap(),
            "path/dog.txt"
        );
    }

    #[test]
    fn test_join_collapses_repeated_separators() {
        assert_eq!(
            join_path("path///", "dog.txt", Separator::UNIX).unwrap(),
            "path/dog.txt"
        );
    }

    #[test]
    fn test_join_root() {
        assert_eq!(
            join_path("/", "dog.txt", Separator::UNIX).unwrap(),
            "/dog.txt"
        );
    }

    #[test]
    fn test_join_windows_separator() {
        assert_eq!(
            join_path(r"C:\Users", "dog.txt", Separator::WINDOWS).unwrap(),
            r"C:\Users\dog.txt"
        );
        assert_eq!(
            join_path(r"C:\Users\", "dog.txt", Separator::WINDOWS).unwrap(),
            r"C:\Users\dog.txt"
        );
    }

    #[test]
    fn test_join_empty_directory_rejected() {
        let err = join_path("", "dog.txt", Separator::UNIX).unwrap_err();
        assert!(matches!(err, PathError::InvalidArgument(_)));
    }
}
