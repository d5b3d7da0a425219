//! TreeWalker - builds the tree listing and the included file list in one pass

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, SnapshotError};

use super::config::FilterConfig;
use super::filter::FileFilter;
use super::utils::{display_name, indent, join_relative};

/// Title line at the top of every tree listing.
pub const DEFAULT_TREE_TITLE: &str = "Project Directory Structure:";

/// A file selected for the content segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludedFile {
    /// Path used to read the file
    pub path: PathBuf,
    /// Path relative to the root, `/`-separated
    pub relative: String,
}

/// Result of walking a root directory.
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    /// Title line followed by one line per directory and included file
    pub tree_lines: Vec<String>,
    /// Included files, sorted by relative path
    pub files: Vec<IncludedFile>,
    /// Number of directories visited below the root
    pub dir_count: usize,
}

impl Traversal {
    /// The tree segment as a single string, without a trailing newline.
    pub fn tree(&self) -> String {
        self.tree_lines.join("\n")
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Walks a directory tree depth-first, pruning excluded directories.
///
/// Entries are visited in lexicographic order. Each directory line is
/// followed by its included files, then by its subdirectories.
pub struct TreeWalker<'a> {
    filter: FileFilter<'a>,
    title: String,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self {
            filter: FileFilter::new(config),
            title: DEFAULT_TREE_TITLE.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Walk `root`. Failing to read the root itself is an error; unreadable
    /// subdirectories are skipped with a warning.
    pub fn walk(&self, root: &Path) -> Result<Traversal> {
        let mut traversal = Traversal {
            tree_lines: vec![self.title.clone()],
            ..Default::default()
        };
        traversal.tree_lines.push(format!("{}/", display_name(root)));

        let entries = self
            .read_entries(root)
            .map_err(|source| SnapshotError::ReadDir {
                path: root.to_path_buf(),
                source,
            })?;
        self.walk_dir(entries, "", 0, &mut traversal);

        traversal.files.sort_by(|a, b| a.relative.cmp(&b.relative));
        log::debug!(
            "Walk complete: {} directories, {} files",
            traversal.dir_count,
            traversal.files.len()
        );
        Ok(traversal)
    }

    /// Read one directory and split it into included files and subdirectories,
    /// each sorted by name.
    fn read_entries(&self, path: &Path) -> io::Result<DirEntries> {
        let mut entries = DirEntries::default();

        for entry in fs::read_dir(path)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().to_string();
            let entry_path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    log::warn!("Skipping {}: {}", entry_path.display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                if self.filter.is_excluded_dir(&name) {
                    log::trace!("Pruning excluded directory: {}", entry_path.display());
                    continue;
                }
                entries.subdirs.push((name, entry_path));
            } else if file_type.is_symlink() && entry_path.is_dir() {
                // Linked directories are never descended into
                log::trace!("Skipping directory symlink: {}", entry_path.display());
            } else if self.filter.is_included_file(&name) {
                entries.files.push((name, entry_path));
            } else {
                log::trace!("Skipping file: {}", entry_path.display());
            }
        }

        entries.files.sort_by(|a, b| a.0.cmp(&b.0));
        entries.subdirs.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }

    fn walk_dir(
        &self,
        entries: DirEntries,
        relative: &str,
        depth: usize,
        traversal: &mut Traversal,
    ) {
        let child_indent = indent(depth + 1);
        for (name, file_path) in entries.files {
            traversal.tree_lines.push(format!("{}{}", child_indent, name));
            traversal.files.push(IncludedFile {
                relative: join_relative(relative, &name),
                path: file_path,
            });
        }

        for (name, dir_path) in entries.subdirs {
            // An unreadable directory gets no line at all
            let sub_entries = match self.read_entries(&dir_path) {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("Skipping unreadable directory {}: {}", dir_path.display(), e);
                    continue;
                }
            };
            traversal.dir_count += 1;
            traversal
                .tree_lines
                .push(format!("{}{}/", child_indent, name));
            self.walk_dir(
                sub_entries,
                &join_relative(relative, &name),
                depth + 1,
                traversal,
            );
        }
    }
}

/// Entries of one directory, as (name, path) pairs.
#[derive(Default)]
struct DirEntries {
    files: Vec<(String, PathBuf)>,
    subdirs: Vec<(String, PathBuf)>,
}
