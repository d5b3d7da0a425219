//! Directory tree walking logic
//!
//! `TreeWalker` walks a root once and produces both the indented tree
//! listing and the sorted list of files whose contents go in the snapshot.

mod config;
mod filter;
mod utils;
mod walker;

// Re-export public types
pub use config::{
    DEFAULT_EXCLUDED_DIRS, DEFAULT_INCLUDED_EXTENSIONS, DEFAULT_OUTPUT_FILE, DEFAULT_SKIPPED_FILES,
    FilterConfig, LOCK_FILE_MARKER,
};
pub use filter::{FileFilter, file_extension};
pub use walker::{DEFAULT_TREE_TITLE, IncludedFile, Traversal, TreeWalker};
