//! Path decomposition and reconstruction.
//!
//! A path string splits into three owned pieces:
//!
//! ```text
//! path/to/dog.txt
//! ├──────┤├─┤├──┤
//! directory  │  extension
//!         base_name
//! ```
//!
//! `directory` keeps its trailing separator, `extension` keeps its leading
//! dot. Either may be empty.

use super::{Separator, is_regular_file};
use crate::error::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How to split a name whose only dot is its first character (`.bashrc`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DotfilePolicy {
    /// The leading dot starts the extension: `.bashrc` -> `""` + `.bashrc` (default).
    #[default]
    Extension,
    /// The whole name is the base name: `.bashrc` -> `.bashrc` + `""`.
    BaseName,
}

/// Per-call settings for splitting a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    pub separator: Separator,
    pub dotfile: DotfilePolicy,
}

impl SplitOptions {
    pub const fn new(separator: Separator, dotfile: DotfilePolicy) -> Self {
        Self { separator, dotfile }
    }

    pub const fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    pub const fn with_dotfile(mut self, dotfile: DotfilePolicy) -> Self {
        self.dotfile = dotfile;
        self
    }
}

/// A path split into directory, base name and extension.
///
/// Immutable once built. The original input is kept verbatim in
/// [`full_path`](Self::full_path); [`reconstruct`](Self::reconstruct)
/// reassembles the pieces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathParts {
    directory: String,
    base_name: String,
    extension: String,
    full_path: String,
    separator: Separator,
}

impl PathParts {
    /// Decompose the path of an existing regular file.
    ///
    /// Fails with [`PathError::NotAFile`] when `path` does not exist or is not
    /// a regular file. Nothing is split in that case.
    pub fn decompose(path: impl AsRef<str>, options: SplitOptions) -> Result<Self, PathError> {
        let path = path.as_ref();
        if !is_regular_file(path) {
            return Err(PathError::NotAFile(path.to_owned()));
        }
        Ok(Self::split(path, options))
    }

    /// Split a path string without touching the filesystem.
    pub fn split(path: &str, options: SplitOptions) -> Self {
        let separator = options.separator;

        let name_start = path
            .rfind(separator.as_char())
            .map_or(0, |idx| idx + separator.len_utf8());
        let (directory, name) = path.split_at(name_start);

        // Only dots inside the final segment can start an extension
        let ext_start = match name.rfind('.') {
            Some(0) if options.dotfile == DotfilePolicy::BaseName => name.len(),
            Some(idx) => idx,
            None => name.len(),
        };
        let (base_name, extension) = name.split_at(ext_start);

        Self {
            directory: directory.to_owned(),
            base_name: base_name.to_owned(),
            extension: extension.to_owned(),
            full_path: path.to_owned(),
            separator,
        }
    }

    /// Reassemble directory, base name and extension into a path.
    ///
    /// A non-empty directory is normalized to end in exactly one separator.
    /// An empty directory yields a bare `base_name + extension`.
    pub fn reconstruct(&self) -> String {
        let sep = self.separator.as_char();
        let mut path = String::with_capacity(
            self.directory.len() + self.base_name.len() + self.extension.len() + 1,
        );

        if !self.directory.is_empty() {
            path.push_str(self.directory.trim_end_matches(sep));
            path.push(sep);
        }
        path.push_str(&self.base_name);
        path.push_str(&self.extension);
        path
    }

    /// Directory portion including its trailing separator, or `""`.
    #[inline]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    #[inline]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Extension including its leading dot, or `""`.
    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The input exactly as given.
    #[inline]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    #[inline]
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// `false` when the input had no separator at all.
    #[inline]
    pub fn has_directory(&self) -> bool {
        !self.directory.is_empty()
    }

    #[inline]
    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }

    /// Base name and extension, without the directory.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension)
    }
}

/// Multi-line report for manual inspection. Not a stable format.
impl fmt::Display for PathParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "directory   = {}", self.directory)?;
        writeln!(f, "base_name   = {}", self.base_name)?;
        writeln!(f, "extension   = {}", self.extension)?;
        writeln!(f, "full_path   = {}", self.full_path)?;
        write!(f, "reconstruct = {}", self.reconstruct())
    }
}
