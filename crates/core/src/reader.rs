//! Location-agnostic file readers.

use crate::descriptor::SourceContent;
use crate::error::Result;
use std::path::Path;

/// Read a UTF-8 file and its modification time, propagating any failure.
pub fn read_path(path: &Path) -> Result<SourceContent> {
    let text = std::fs::read_to_string(path)?;
    let modified = std::fs::metadata(path)?.modified()?;
    Ok(SourceContent { text, modified })
}

/// Like [`read_path`] but any failure reads as absent.
pub fn read_file(path: impl AsRef<Path>) -> Option<SourceContent> {
    read_path(path.as_ref()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.cljs");
        std::fs::write(&path, "(ns a)").unwrap();

        let content = read_file(&path).unwrap();
        assert_eq!(content.text, "(ns a)");
        assert_eq!(
            content.modified,
            std::fs::metadata(&path).unwrap().modified().unwrap()
        );
    }

    #[test]
    fn test_read_file_missing_is_none() {
        let dir = tempdir().unwrap();
        assert!(read_file(dir.path().join("nope")).is_none());
        // A directory is not readable as text
        assert!(read_file(dir.path()).is_none());
    }

    #[test]
    fn test_read_path_propagates() {
        let dir = tempdir().unwrap();
        assert!(read_path(&dir.path().join("nope")).unwrap_err().is_not_found());
    }
}
