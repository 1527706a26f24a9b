//! Path inspection and decomposition.
//!
//! Split a file path into directory, base name and extension, put the
//! pieces back together, and join directories with file names.
//!
//! ```
//! use pathparts::utils::path::{PathParts, Separator, SplitOptions};
//!
//! let options = SplitOptions::default().with_separator(Separator::UNIX);
//! let parts = PathParts::split("path/dog.txt", options);
//! assert_eq!(parts.directory(), "path/");
//! assert_eq!(parts.base_name(), "dog");
//! assert_eq!(parts.extension(), ".txt");
//! assert_eq!(parts.reconstruct(), "path/dog.txt");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod utils;

pub use error::PathError;
pub use utils::path::{
    DotfilePolicy, PathParts, Separator, SplitOptions, is_directory, is_regular_file, join_path,
};
