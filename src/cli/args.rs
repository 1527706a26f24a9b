//! Command-line interface definitions.

use crate::utils::path::{DotfilePolicy, Separator};
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Split file paths into directory, base name and extension
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: pathparts.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "pathparts.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Directory separator, overrides `[path] separator`
    #[arg(short, long, global = true)]
    pub separator: Option<Separator>,

    /// How to split names like `.bashrc`, overrides `[path] dotfile`
    #[arg(long, global = true)]
    pub dotfile: Option<DotfilePolicy>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Decompose regular files into directory, base name and extension
    #[command(visible_alias = "s")]
    Split {
        /// Paths of existing regular files
        #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
        paths: Vec<String>,
    },

    /// Join a directory and a file name with a single separator
    #[command(visible_alias = "j")]
    Join {
        /// Directory (must not be empty)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        directory: String,

        /// File name (base name and extension)
        name: String,
    },

    /// Report whether paths are directories, regular files, or neither
    #[command(visible_alias = "p")]
    Probe {
        #[arg(required = true, value_hint = clap::ValueHint::AnyPath)]
        paths: Vec<PathBuf>,
    },
}
