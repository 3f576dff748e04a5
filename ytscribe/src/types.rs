use serde::{Deserialize, Serialize};

/// One caption cue as returned by the transcript provider.
///
/// Timing is carried on the wire but discarded when writing output — only
/// `text` is consumed downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// A fetched transcript for one video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,
    pub title: String,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Flat text block: each segment's text followed by a single space.
    pub fn text(&self) -> String {
        flatten_segments(&self.segments)
    }
}

/// Concatenate segment texts into one flat block, a single trailing space per
/// segment. `["a", "b"]` becomes `"a b "`.
pub fn flatten_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        out.push_str(&seg.text);
        out.push(' ');
    }
    out
}
