//! Snapshot output
//!
//! # Module Structure
//!
//! - `config` - Snapshot configuration types
//! - `snapshot` - Tree and file-content rendering
//! - `console` - Status messages for the CLI

mod config;
mod console;
mod snapshot;

pub use config::{DEFAULT_IGNORE_FILE, SnapshotConfig};
pub use console::{Console, summary_line};
pub use snapshot::{CONTENTS_HEADER, SnapshotSummary, SnapshotWriter, write_snapshot};
