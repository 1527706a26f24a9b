//! Directory separator.
//!
//! The separator is a value rather than a compile-time constant so it can be
//! resolved once from configuration and injected per call.

use crate::error::PathError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Character dividing directory segments in a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Separator(char);

impl Separator {
    /// Forward slash (`/`), used everywhere except Windows.
    pub const UNIX: Self = Self('/');
    /// Backslash (`\`), used on Windows.
    pub const WINDOWS: Self = Self('\\');

    /// Separator of the target platform.
    pub const fn platform() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else {
            Self::UNIX
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Byte length of the separator in UTF-8.
    #[inline]
    pub const fn len_utf8(self) -> usize {
        self.0.len_utf8()
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::platform()
    }
}

impl TryFrom<char> for Separator {
    type Error = PathError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        // `.` marks the extension, it can't also divide directories
        if c == '.' {
            return Err(PathError::invalid_argument(
                "`.` cannot be used as a directory separator",
            ));
        }
        Ok(Self(c))
    }
}

impl From<Separator> for char {
    fn from(sep: Separator) -> Self {
        sep.0
    }
}

impl FromStr for Separator {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(PathError::invalid_argument(format!(
                "separator must be a single character, got `{s}`"
            ))),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
