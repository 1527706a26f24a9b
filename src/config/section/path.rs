//! `[path]` section configuration.
//!
//! Controls how path strings are split.
//!
//! # Example
//!
//! ```toml
//! [path]
//! separator = "/"           # Directory separator (default: platform)
//! dotfile = "extension"     # `.bashrc` -> extension; or "base-name"
//! ```

use crate::utils::path::{DotfilePolicy, Separator, SplitOptions};
use serde::Deserialize;

/// Path splitting settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathSectionConfig {
    /// Directory separator. `None` means the platform separator.
    pub separator: Option<Separator>,

    /// How names like `.bashrc` are split.
    pub dotfile: DotfilePolicy,
}

impl PathSectionConfig {
    /// Effective separator after falling back to the platform default.
    pub fn separator(&self) -> Separator {
        self.separator.unwrap_or_default()
    }

    /// Options handed to every split in this process.
    pub fn options(&self) -> SplitOptions {
        SplitOptions::new(self.separator(), self.dotfile)
    }
}
