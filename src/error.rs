//! Error types for snapshot generation

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = SnapshotError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create output file '{path}': {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to update '{path}': {source}")]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SnapshotError {
    /// Path the failed operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            SnapshotError::ReadDir { path, .. }
            | SnapshotError::OutputCreate { path, .. }
            | SnapshotError::OutputWrite { path, .. }
            | SnapshotError::IgnoreFile { path, .. } => path,
        }
    }
}
