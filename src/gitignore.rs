//! Ignore-list maintenance
//!
//! Registers the generated snapshot in the project's ignore list so it is
//! never committed. This is a best-effort step: callers report failures
//! as warnings and carry on.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, SnapshotError};

/// Comment line written above the entry.
pub const IGNORE_COMMENT: &str = "# Ignore generated context file";

/// What `ensure_ignore_entry` did to the ignore file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreUpdate {
    /// The ignore file did not exist and was created
    Created,
    /// The entry was appended to an existing ignore file
    Added,
    /// The entry was already listed; nothing was written
    AlreadyPresent,
}

/// Ensure `entry` appears as a line of `root/ignore_file`.
pub fn ensure_ignore_entry(root: &Path, ignore_file: &str, entry: &str) -> Result<IgnoreUpdate> {
    let path = root.join(ignore_file);
    let io_err = |source: io::Error| SnapshotError::IgnoreFile {
        path: path.clone(),
        source,
    };

    let existing = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::write(&path, format!("{}\n{}\n", IGNORE_COMMENT, entry)).map_err(io_err)?;
            log::debug!("Created {}", path.display());
            return Ok(IgnoreUpdate::Created);
        }
        Err(e) => return Err(io_err(e)),
    };

    if existing.lines().any(|line| line == entry) {
        return Ok(IgnoreUpdate::AlreadyPresent);
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(&path)
        .map_err(io_err)?;
    write!(file, "\n{}\n{}\n", IGNORE_COMMENT, entry).map_err(io_err)?;
    log::debug!("Appended '{}' to {}", entry, path.display());
    Ok(IgnoreUpdate::Added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRepo;

    const ENTRY: &str = "project_context.txt";

    #[test]
    fn test_creates_missing_file() {
        let repo = TestRepo::new();
        let update = ensure_ignore_entry(repo.path(), ".gitignore", ENTRY).unwrap();

        assert_eq!(update, IgnoreUpdate::Created);
        assert_eq!(
            repo.read(".gitignore"),
            "# Ignore generated context file\nproject_context.txt\n"
        );
    }

    #[test]
    fn test_appends_to_existing_file() {
        let repo = TestRepo::new();
        repo.add_file(".gitignore", "target/\n");

        let update = ensure_ignore_entry(repo.path(), ".gitignore", ENTRY).unwrap();

        assert_eq!(update, IgnoreUpdate::Added);
        assert_eq!(
            repo.read(".gitignore"),
            "target/\n\n# Ignore generated context file\nproject_context.txt\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let repo = TestRepo::new();
        ensure_ignore_entry(repo.path(), ".gitignore", ENTRY).unwrap();
        let update = ensure_ignore_entry(repo.path(), ".gitignore", ENTRY).unwrap();

        assert_eq!(update, IgnoreUpdate::AlreadyPresent);
        let content = repo.read(".gitignore");
        assert_eq!(content.lines().filter(|l| *l == ENTRY).count(), 1);
    }

    #[test]
    fn test_crlf_line_matches() {
        let repo = TestRepo::new();
        repo.add_file(".gitignore", "node_modules\r\nproject_context.txt\r\n");

        let update = ensure_ignore_entry(repo.path(), ".gitignore", ENTRY).unwrap();
        assert_eq!(update, IgnoreUpdate::AlreadyPresent);
    }

    #[test]
    fn test_partial_match_is_not_present() {
        let repo = TestRepo::new();
        repo.add_file(".gitignore", "/project_context.txt\nproject_context.txt.bak\n");

        let update = ensure_ignore_entry(repo.path(), ".gitignore", ENTRY).unwrap();
        assert_eq!(update, IgnoreUpdate::Added);
    }

    #[test]
    fn test_unreadable_ignore_file_is_an_error() {
        let repo = TestRepo::new();
        repo.add_dir(".gitignore");

        let err = ensure_ignore_entry(repo.path(), ".gitignore", ENTRY).unwrap_err();
        assert!(matches!(err, SnapshotError::IgnoreFile { .. }));
    }
}
