//! `probe` subcommand.

use crate::utils::path::{is_directory, is_regular_file};
use std::{fmt, path::Path};

/// What a probed path turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
    /// Missing, inaccessible, or neither a directory nor a regular file.
    Other,
}

impl PathKind {
    pub fn of(path: &Path) -> Self {
        if is_directory(path) {
            Self::Directory
        } else if is_regular_file(path) {
            Self::File
        } else {
            Self::Other
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
            Self::Other => "missing/other",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn run_probe<P: AsRef<Path>>(paths: &[P]) {
    for path in paths {
        let path = path.as_ref();
        println!("{}\t{}", PathKind::of(path), path.display());
    }
}
