//! Shared file reading utilities
//!
//! Snapshot contents are read permissively: a file that is not valid UTF-8
//! still produces text, with invalid sequences replaced by U+FFFD.

use std::io;
use std::path::Path;

/// Read a file as text, replacing invalid UTF-8 sequences.
pub fn read_text_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_lossy_utf8() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("app.ts");
        fs::write(&file_path, "const π = 3.14;").unwrap();

        assert_eq!(read_text_lossy(&file_path).unwrap(), "const π = 3.14;");
    }

    #[test]
    fn test_read_text_lossy_invalid_bytes_replaced() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("latin1.txt");
        fs::write(&file_path, b"caf\xe9 ok").unwrap();

        let text = read_text_lossy(&file_path).unwrap();
        assert_eq!(text, "caf\u{FFFD} ok");
    }

    #[test]
    fn test_read_text_lossy_nonexistent() {
        let result = read_text_lossy(Path::new("/nonexistent/file.ts"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_text_lossy_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(read_text_lossy(dir.path()).is_err());
    }
}
