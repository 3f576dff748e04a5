use std::path::PathBuf;

/// All errors that can occur in ytscribe.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input file not found: {path}")]
    MissingInput { path: PathBuf },

    #[error("input file contains no video URLs: {path}")]
    EmptyInput { path: PathBuf },

    #[error("no video id in reference (expected a v= parameter or youtu.be link): {reference}")]
    MalformedReference { reference: String },

    #[error("provider error: {0}")]
    Provider(String),

    #[error("no transcript in [{}] for video {video_id}", languages.join(", "))]
    TranscriptUnavailable {
        video_id: String,
        languages: Vec<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_input() {
        let e = Error::MissingInput {
            path: PathBuf::from("videos.txt"),
        };
        assert!(e.to_string().contains("videos.txt"));
        assert!(e.to_string().contains("not found"));
    }

    #[test]
    fn test_error_display_malformed_reference() {
        let e = Error::MalformedReference {
            reference: "https://example.com/clip/42".into(),
        };
        assert!(e.to_string().contains("https://example.com/clip/42"));
    }

    #[test]
    fn test_error_display_transcript_unavailable() {
        let e = Error::TranscriptUnavailable {
            video_id: "dQw4w9WgXcQ".into(),
            languages: vec!["en".into(), "de".into()],
        };
        let msg = e.to_string();
        assert!(msg.contains("dQw4w9WgXcQ"));
        assert!(msg.contains("en, de"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<String>("not json").unwrap_err();
        let e: Error = json_err.into();
        assert!(matches!(e, Error::Json(_)));
    }

    #[test]
    fn test_error_debug_impl() {
        let e = Error::Provider("rate limited".into());
        let debug = format!("{:?}", e);
        assert!(debug.contains("Provider"));
    }
}
