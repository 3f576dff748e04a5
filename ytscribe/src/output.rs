use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::types::{flatten_segments, Segment};

/// Write a transcript as flat UTF-8 text to `<dir>/<stem>.txt`.
///
/// The directory is created if absent. An existing file with the same name is
/// overwritten — collisions are last-writer-wins.
pub fn write_transcript(dir: &Path, stem: &str, segments: &[Segment]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(format!("{stem}.txt"));
    std::fs::write(&path, flatten_segments(segments))?;

    debug!(path = %path.display(), segments = segments.len(), "transcript written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str) -> Segment {
        Segment {
            text: text.into(),
            start: 0.0,
            duration: 0.0,
        }
    }

    #[test]
    fn test_written_content_keeps_trailing_space() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_transcript(dir.path(), "A Title", &[seg("a"), seg("b")]).unwrap();
        assert_eq!(path, dir.path().join("A Title.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a b ");
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("transcripts");
        write_transcript(&nested, "t", &[seg("x")]).unwrap();
        assert!(nested.join("t.txt").exists());
    }

    #[test]
    fn test_overwrites_on_collision() {
        let dir = tempfile::tempdir().unwrap();
        write_transcript(dir.path(), "same", &[seg("first")]).unwrap();
        let path = write_transcript(dir.path(), "same", &[seg("second")]).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second ");
    }

    #[test]
    fn test_empty_stem_writes_dot_txt() {
        // An all-symbol title sanitizes to "", so the file is just ".txt".
        let dir = tempfile::tempdir().unwrap();
        let path = write_transcript(dir.path(), "", &[seg("x")]).unwrap();
        assert_eq!(path, dir.path().join(".txt"));
        assert!(path.exists());
    }
}
