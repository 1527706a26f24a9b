//! Command-line interface module.

mod args;
pub mod join;
pub mod probe;
pub mod split;

pub use args::{Cli, Commands};

use crate::config::cfg;
use anyhow::Result;

/// Dispatch a parsed command using the global config.
pub fn run(cli: &Cli) -> Result<()> {
    let options = cfg().path.options();

    match &cli.command {
        Commands::Split { paths } => split::run_split(paths, options),
        Commands::Join { directory, name } => join::run_join(directory, name, options.separator),
        Commands::Probe { paths } => {
            probe::run_probe(paths.as_slice());
            Ok(())
        }
    }
}
