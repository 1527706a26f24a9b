//! Configuration sections.
//!
//! | Section  | Purpose                                   |
//! |----------|-------------------------------------------|
//! | `[path]` | Separator and dotfile splitting rules     |

mod path;

pub use path::PathSectionConfig;
