//! Path inspection and decomposition.
//!
//! - [`fs`]: Filesystem probes (`is_directory`, `is_regular_file`)
//! - [`parts`]: Decomposition into directory / base name / extension (`PathParts`)
//! - [`join`]: Directory + name joining (`join_path`)
//! - [`separator`]: Directory separator value (`Separator`)
//!
//! Everything except the probes is a pure string transformation.

pub mod fs;
pub mod join;
pub mod parts;
pub mod separator;

pub use fs::{is_directory, is_regular_file};
pub use join::join_path;
pub use parts::{DotfilePolicy, PathParts, SplitOptions};
pub use separator::Separator;
