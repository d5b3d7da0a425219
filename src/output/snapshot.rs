//! Snapshot rendering
//!
//! This module provides `SnapshotWriter`, which writes the tree segment
//! followed by one delimited section per included file, and
//! `write_snapshot`, which walks a root and writes the result to disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SnapshotError};
use crate::file_utils::read_text_lossy;
use crate::tree::{IncludedFile, Traversal, TreeWalker};

use super::config::SnapshotConfig;

/// Separator between the tree segment and the content segment.
pub const CONTENTS_HEADER: &str = "--- FILE CONTENTS ---";

/// Counts reported after a snapshot is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub output_path: PathBuf,
    pub dir_count: usize,
    pub file_count: usize,
    /// Files whose body was replaced by an error comment
    pub read_errors: usize,
}

/// Writes a snapshot to any `Write` sink.
pub struct SnapshotWriter<W: Write> {
    out: W,
    read_errors: usize,
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            read_errors: 0,
        }
    }

    /// Write the tree segment and the content separator.
    pub fn write_tree(&mut self, traversal: &Traversal) -> io::Result<()> {
        self.out.write_all(traversal.tree().as_bytes())?;
        write!(self.out, "\n\n\n{}\n", CONTENTS_HEADER)
    }

    /// Write one file section. Read failures become an inline error comment.
    pub fn write_file(&mut self, file: &IncludedFile) -> io::Result<()> {
        write!(self.out, "\n----- FILE: {} -----\n", file.relative)?;
        match read_text_lossy(&file.path) {
            Ok(content) => self.out.write_all(content.as_bytes())?,
            Err(e) => {
                log::warn!("Error reading {}: {}", file.path.display(), e);
                self.read_errors += 1;
                write!(self.out, "<!-- Error reading file: {} -->", e)?;
            }
        }
        self.out.write_all(b"\n----- END FILE -----\n")
    }

    /// Write the whole snapshot for a traversal, files in sorted order.
    pub fn write_all(&mut self, traversal: &Traversal) -> io::Result<()> {
        self.write_tree(traversal)?;
        for file in &traversal.files {
            self.write_file(file)?;
        }
        Ok(())
    }

    pub fn read_errors(&self) -> usize {
        self.read_errors
    }

    /// Flush and return the underlying sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Walk `root` and write the snapshot to `root/<output file>`.
pub fn write_snapshot(root: &Path, config: &SnapshotConfig) -> Result<SnapshotSummary> {
    let traversal = TreeWalker::new(&config.filter)
        .with_title(config.title.as_str())
        .walk(root)?;

    let output_path = root.join(config.output_file());
    let file = File::create(&output_path).map_err(|source| SnapshotError::OutputCreate {
        path: output_path.clone(),
        source,
    })?;
    log::debug!("Writing snapshot to {}", output_path.display());

    let mut writer = SnapshotWriter::new(BufWriter::new(file));
    let write_err = |source: io::Error| SnapshotError::OutputWrite {
        path: output_path.clone(),
        source,
    };
    writer.write_all(&traversal).map_err(write_err)?;
    let read_errors = writer.read_errors();
    writer.finish().map_err(write_err)?;

    Ok(SnapshotSummary {
        output_path,
        dir_count: traversal.dir_count,
        file_count: traversal.file_count(),
        read_errors,
    })
}
