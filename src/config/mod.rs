//! Configuration management for `pathparts.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── path       # [path]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   └── handle     # Global config handle
//! └── mod.rs         # PartsConfig (this file)
//! ```
//!
//! The config file is optional. Without one every setting takes its default,
//! and CLI flags override whatever the file says.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::PathSectionConfig;
pub use types::{ConfigError, cfg, init_config};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pathparts.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartsConfig {
    /// Absolute path to the config file, empty when none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Path splitting settings
    #[serde(default)]
    pub path: PathSectionConfig,
}

impl PartsConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file; a missing file is not an
    /// error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.apply_cli_options(cli);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// CLI flags take precedence over the config file.
    fn apply_cli_options(&mut self, cli: &Cli) {
        if let Some(separator) = cli.separator {
            self.path.separator = Some(separator);
        }
        if let Some(dotfile) = cli.dotfile {
            self.path.dotfile = dotfile;
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
pub fn test_parse_config(content: &str) -> PartsConfig {
    let (parsed, ignored) = PartsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::path::{DotfilePolicy, Separator};
    use clap::Parser;

    #[test]
    fn test_from_str() {
        let config = PartsConfig::from_str("[path]\nseparator = \"/\"").unwrap();
        assert_eq!(config.path.separator, Some(Separator::UNIX));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (config, ignored) =
            PartsConfig::parse_with_ignored("[path]\ndotfile = \"base-name\"\ncolour = 3\n[extra]\nx = 1")
                .unwrap();
        assert_eq!(config.path.dotfile, DotfilePolicy::BaseName);
        assert_eq!(ignored.len(), 2);
        assert!(ignored.iter().any(|field| field == "path.colour"));
        assert!(ignored.iter().any(|field| field == "extra"));
    }

    #[test]
    fn test_invalid_separator_rejected() {
        assert!(PartsConfig::parse_with_ignored("[path]\nseparator = \".\"").is_err());
        assert!(PartsConfig::parse_with_ignored("[path]\nseparator = \"ab\"").is_err());
    }

    #[test]
    fn test_invalid_dotfile_rejected() {
        assert!(PartsConfig::from_str("[path]\ndotfile = \"sometimes\"").is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = test_parse_config("[path]\nseparator = \"/\"\ndotfile = \"extension\"");
        let cli = Cli::try_parse_from([
            "pathparts",
            "--separator",
            "\\",
            "--dotfile",
            "base-name",
            "join",
            "a",
            "b",
        ])
        .unwrap();

        config.apply_cli_options(&cli);
        assert_eq!(config.path.separator(), Separator::WINDOWS);
        assert_eq!(config.path.dotfile, DotfilePolicy::BaseName);
    }

    #[test]
    fn test_cli_without_overrides_keeps_config() {
        let mut config = test_parse_config("[path]\nseparator = \":\"");
        let cli = Cli::try_parse_from(["pathparts", "join", "a", "b"]).unwrap();

        config.apply_cli_options(&cli);
        assert_eq!(config.path.separator().as_char(), ':');
        assert_eq!(config.path.dotfile, DotfilePolicy::Extension);
    }
}
