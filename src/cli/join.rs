//! `join` subcommand.

use crate::utils::path::{Separator, join_path};
use anyhow::{Context, Result};

pub fn run_join(directory: &str, name: &str, separator: Separator) -> Result<()> {
    let joined = join_path(directory, name, separator)
        .with_context(|| format!("cannot join `{directory}` and `{name}`"))?;
    println!("{joined}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_join_empty_directory() {
        let err = run_join("", "dog.txt", Separator::UNIX).unwrap_err();
        assert!(err.to_string().contains("cannot join"));
        assert!(format!("{err:#}").contains("directory must not be empty"));
    }
}
