use std::path::Path;

use crate::error::{Error, Result};

/// Read a newline-separated reference list. Lines are trimmed and blank lines
/// skipped. A missing file is [`Error::MissingInput`]; a file with no usable
/// lines is [`Error::EmptyInput`] — both fatal before any provider work.
pub fn read_references(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingInput {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let references: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if references.is_empty() {
        return Err(Error::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok(references)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_references(dir.path().join("videos.txt")).unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("videos.txt");
        std::fs::write(&path, "").unwrap();
        let err = read_references(&path).unwrap_err();
        assert!(matches!(err, Error::EmptyInput { .. }));
    }

    #[test]
    fn test_blank_lines_only_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("videos.txt");
        std::fs::write(&path, "\n   \n\t\n").unwrap();
        let err = read_references(&path).unwrap_err();
        assert!(matches!(err, Error::EmptyInput { .. }));
    }

    #[test]
    fn test_skips_blank_lines_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("videos.txt");
        std::fs::write(&path, "https://a/watch?v=one\n\n  https://a/watch?v=two  \n").unwrap();
        let refs = read_references(&path).unwrap();
        assert_eq!(refs, vec!["https://a/watch?v=one", "https://a/watch?v=two"]);
    }
}
