//! Batch YouTube transcript fetcher — URL list in, plain-text transcripts out.
//!
//! **ytscribe** reads video references (watch URLs or youtu.be links),
//! resolves each video's title and caption track, and writes one flat `.txt`
//! file per video. Items fail independently: one dead link never aborts the
//! rest of the batch.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> ytscribe::Result<()> {
//! use std::path::Path;
//!
//! // Fetch a single transcript
//! let transcript = ytscribe::fetch_transcript("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await?;
//! println!("{}", transcript.text());
//!
//! // Or run a whole batch — per-item failures are reported, not raised
//! let references = ytscribe::input::read_references("videos.txt")?;
//! let provider = ytscribe::YouTubeProvider::new()?;
//! let summary = ytscribe::process_batch(
//!     &references,
//!     Path::new(ytscribe::DEFAULT_OUTPUT_DIR),
//!     ytscribe::DEFAULT_LANGUAGES,
//!     &provider,
//!     &provider,
//! )
//! .await;
//! println!("{} saved, {} failed", summary.saved(), summary.failed());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod error;
pub mod input;
pub mod output;
pub mod provider;
pub mod reference;
pub mod sanitize;
pub mod types;

pub use batch::{
    process_batch, process_reference, BatchSummary, ItemOutcome, ItemReport, DEFAULT_LANGUAGES,
    DEFAULT_OUTPUT_DIR,
};
pub use error::{Error, Result};
pub use provider::{MetadataProvider, TranscriptProvider, YouTubeProvider};
pub use types::{Segment, Transcript};

/// Fetch a single video's transcript with default settings.
///
/// Convenience wrapper over [`YouTubeProvider`] for callers that want the
/// transcript in memory rather than on disk.
pub async fn fetch_transcript(reference: &str) -> Result<Transcript> {
    let provider = YouTubeProvider::new()?;
    let video_id = reference::extract_video_id(reference)?;
    let title = provider.fetch_title(reference).await?;
    let segments = provider.fetch_segments(&video_id, DEFAULT_LANGUAGES).await?;

    Ok(Transcript {
        video_id,
        title,
        segments,
    })
}
