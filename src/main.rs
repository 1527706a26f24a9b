//! pathparts - split file paths into directory, base name and extension.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use pathparts::{
    cli::{self, Cli},
    config::{PartsConfig, init_config},
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    init_config(PartsConfig::load(&cli)?);

    cli::run(&cli)
}
