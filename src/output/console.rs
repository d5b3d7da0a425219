//! Console status reporting
//!
//! Progress, status and warning lines all go to stdout. Colors are applied
//! only when enabled.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::gitignore::IgnoreUpdate;

use super::snapshot::SnapshotSummary;

/// Writes human-readable status messages for a snapshot run.
pub struct Console {
    stdout: StandardStream,
}

impl Console {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    pub fn scanning(&mut self, root: &std::path::Path) -> io::Result<()> {
        write_styled(
            &mut self.stdout,
            Color::Cyan,
            &format!("Scanning project in '{}'...", root.display()),
        )
    }

    pub fn saved(&mut self, output_file: &str, summary: &SnapshotSummary) -> io::Result<()> {
        write_styled(
            &mut self.stdout,
            Color::Green,
            &format!("Workspace context successfully saved to '{}'.", output_file),
        )?;
        writeln!(
            self.stdout,
            "{}",
            summary_line(summary.dir_count, summary.file_count)
        )?;
        if summary.read_errors > 0 {
            self.warning(&format!(
                "{} file(s) could not be read; see the error comments in the output",
                summary.read_errors
            ))?;
        }
        Ok(())
    }

    pub fn ignore_updated(
        &mut self,
        update: IgnoreUpdate,
        entry: &str,
        file: &str,
    ) -> io::Result<()> {
        match update {
            IgnoreUpdate::Created => write_styled(
                &mut self.stdout,
                Color::Green,
                &format!("Created {} and added '{}' to it.", file, entry),
            ),
            IgnoreUpdate::Added => write_styled(
                &mut self.stdout,
                Color::Green,
                &format!("Added '{}' to {}.", entry, file),
            ),
            IgnoreUpdate::AlreadyPresent => {
                writeln!(self.stdout, "'{}' is already in {}.", entry, file)
            }
        }
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        write_styled(&mut self.stdout, Color::Yellow, &format!("warning: {}", message))
    }
}

/// `1 directory, 2 files` style summary.
pub fn summary_line(dirs: usize, files: usize) -> String {
    format!(
        "{} {}, {} {}",
        dirs,
        if dirs == 1 { "directory" } else { "directories" },
        files,
        if files == 1 { "file" } else { "files" }
    )
}

fn write_styled(out: &mut StandardStream, color: Color, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", message)?;
    out.reset()?;
    writeln!(out)
}
