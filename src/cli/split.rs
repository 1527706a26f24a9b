//! `split` subcommand.

use crate::{
    debug, log,
    utils::path::{PathParts, SplitOptions},
};
use anyhow::{Result, bail};
use std::io::{self, Write};

/// Decompose every path and write its report to `out`.
///
/// Paths that are not regular files are logged and skipped; the command
/// fails once all paths were processed if any of them was skipped.
pub fn split_paths(paths: &[String], options: SplitOptions, out: &mut impl Write) -> Result<()> {
    let mut failed = 0usize;
    let mut written = 0usize;

    for path in paths {
        match PathParts::decompose(path, options) {
            Ok(parts) => {
                debug!("split"; "{} -> {:?} {:?} {:?}",
                    path, parts.directory(), parts.base_name(), parts.extension());
                if written > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{parts}")?;
                written += 1;
            }
            Err(err) => {
                log!("error"; "{}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} path{} could not be split",
            failed,
            paths.len(),
            if paths.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

/// Run `split` against stdout.
pub fn run_split(paths: &[String], options: SplitOptions) -> Result<()> {
    let mut stdout = io::stdout().lock();
    split_paths(paths, options, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
