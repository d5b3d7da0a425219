//! Snapshot configuration types

use crate::tree::{DEFAULT_OUTPUT_FILE, DEFAULT_TREE_TITLE, FilterConfig};

/// Default ignore-list file updated after a snapshot is written.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Configuration for one snapshot run.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub filter: FilterConfig,
    /// Output file name, relative to the root
    output_file: String,
    /// First line of the tree segment
    pub title: String,
    /// Ignore-list file name, relative to the root
    pub ignore_file: String,
}

impl SnapshotConfig {
    pub fn new(filter: FilterConfig) -> Self {
        Self {
            filter,
            output_file: String::new(),
            title: DEFAULT_TREE_TITLE.to_string(),
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
        }
        .with_output_file(DEFAULT_OUTPUT_FILE)
    }

    /// Set the output file name. The output file is always skipped by the walker.
    pub fn with_output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = name.into();
        self.filter.skipped_files.insert(self.output_file.clone());
        self
    }

    pub fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_is_skipped() {
        let config = SnapshotConfig::new(FilterConfig::empty()).with_output_file("dump.txt");
        assert_eq!(config.output_file(), "dump.txt");
        assert!(config.filter.skipped_files.contains("dump.txt"));
        // The default name stays skipped as well
        assert!(config.filter.skipped_files.contains(DEFAULT_OUTPUT_FILE));
    }

    #[test]
    fn test_defaults() {
        let config = SnapshotConfig::default();
        assert_eq!(config.output_file(), "project_context.txt");
        assert_eq!(config.ignore_file, ".gitignore");
        assert_eq!(config.title, "Project Directory Structure:");
    }
}
