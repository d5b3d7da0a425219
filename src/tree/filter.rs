//! File and directory filtering for the snapshot walker

use super::config::FilterConfig;

/// Applies a `FilterConfig` to directory and file names.
pub struct FileFilter<'a> {
    config: &'a FilterConfig,
}

impl<'a> FileFilter<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self { config }
    }

    /// Whether a directory (and its whole subtree) is pruned.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.config.excluded_dirs.contains(name)
    }

    /// Whether a file with this name belongs in the snapshot.
    pub fn is_included_file(&self, name: &str) -> bool {
        if self.config.skipped_files.contains(name) {
            return false;
        }
        if !self.config.lock_file_marker.is_empty() && name.contains(&self.config.lock_file_marker)
        {
            return false;
        }
        match file_extension(name) {
            None => true,
            Some(ext) => self.config.included_extensions.contains(ext),
        }
    }
}

/// Extension of a file name including the leading dot.
///
/// Leading dots are part of the stem, so `.env` has no extension, while
/// `notes.` has the extension `.`.
pub fn file_extension(name: &str) -> Option<&str> {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let dot = name[stem_start..].rfind('.')?;
    Some(&name[stem_start + dot..])
}
