//! Stru - snapshot a project's directory tree and file contents into one text file

pub mod error;
pub mod file_utils;
pub mod gitignore;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, SnapshotError};
pub use gitignore::{IgnoreUpdate, ensure_ignore_entry};
pub use output::{Console, SnapshotConfig, SnapshotSummary, SnapshotWriter, write_snapshot};
pub use tree::{FileFilter, FilterConfig, IncludedFile, Traversal, TreeWalker};
