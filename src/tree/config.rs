//! Filter rules for the snapshot walker

use std::collections::HashSet;

/// Directory names pruned at every depth.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".next",
    "dist",
    "build",
    ".git",
    ".vscode",
    ".idea",
    "out",
    ".cache",
    ".storybook",
    "stories",
    "coverage",
    ".vercel",
    "venv",
    "doc",
    "cache",
    "release",
    "blockjr-app",
    "__pycache__",
    "android",
];

/// Extensions (with the leading dot) whose files are included.
pub const DEFAULT_INCLUDED_EXTENSIONS: &[&str] = &[
    // Frontend
    ".js", ".jsx", ".ts", ".tsx", ".html", ".css", ".scss", ".json",
    // Backend & core
    ".py", ".toml",
    // Config & docs
    ".md", ".txt", ".yml", ".yaml", ".xml", ".env",
];

/// Name of the generated snapshot file.
pub const DEFAULT_OUTPUT_FILE: &str = "project_context.txt";

/// File names skipped regardless of extension.
pub const DEFAULT_SKIPPED_FILES: &[&str] = &[DEFAULT_OUTPUT_FILE, "pnpm-lock.yaml"];

/// Any file whose name contains this is treated as a lock file.
pub const LOCK_FILE_MARKER: &str = "package-lock.json";

/// Configuration for which directories and files end up in a snapshot.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub excluded_dirs: HashSet<String>,
    /// Exact, case-sensitive match including the leading `.`
    pub included_extensions: HashSet<String>,
    pub skipped_files: HashSet<String>,
    /// Substring that marks a file name as a lock file
    pub lock_file_marker: String,
}

impl FilterConfig {
    /// An empty configuration: nothing excluded, only extensionless files included.
    pub fn empty() -> Self {
        Self {
            excluded_dirs: HashSet::new(),
            included_extensions: HashSet::new(),
            skipped_files: HashSet::new(),
            lock_file_marker: LOCK_FILE_MARKER.to_string(),
        }
    }

    pub fn with_excluded_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    pub fn with_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_extensions
            .extend(exts.into_iter().map(Into::into));
        self
    }

    pub fn with_skipped_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skipped_files.extend(names.into_iter().map(Into::into));
        self
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::empty()
            .with_excluded_dirs(DEFAULT_EXCLUDED_DIRS.iter().copied())
            .with_extensions(DEFAULT_INCLUDED_EXTENSIONS.iter().copied())
            .with_skipped_files(DEFAULT_SKIPPED_FILES.iter().copied())
    }
}
