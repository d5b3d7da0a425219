//! Shared helpers for tree walking

use std::path::Path;

/// Indentation unit for one tree level.
pub const INDENT: &str = "    ";

/// Indentation for an entry at the given depth.
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Display name of a path, defaulting to "." for the current directory.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Join a relative prefix and a name with `/`, whatever the platform separator.
pub fn join_relative(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}
