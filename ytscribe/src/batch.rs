use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::output;
use crate::provider::{MetadataProvider, TranscriptProvider};
use crate::reference;
use crate::sanitize;

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "transcripts";

/// Default preferred transcript languages.
pub const DEFAULT_LANGUAGES: &[&str] = &["en"];

/// What happened to one reference.
#[derive(Debug)]
pub enum ItemOutcome {
    Saved { title: String, path: PathBuf },
    Failed { error: Error },
}

/// Per-reference report.
#[derive(Debug)]
pub struct ItemReport {
    pub reference: String,
    pub outcome: ItemOutcome,
}

impl ItemReport {
    pub fn is_saved(&self) -> bool {
        matches!(self.outcome, ItemOutcome::Saved { .. })
    }
}

/// Outcome of a whole batch run, one report per reference in input order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<ItemReport>,
}

impl BatchSummary {
    pub fn saved(&self) -> usize {
        self.reports.iter().filter(|r| r.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.saved()
    }
}

/// Resolve one reference end to end: id, title, transcript, file on disk.
///
/// The per-item pipeline behind [`process_batch`], public so callers that want
/// to interleave their own reporting (a progress bar, say) can drive the loop
/// themselves.
pub async fn process_reference<M, T>(
    reference: &str,
    output_dir: &Path,
    languages: &[&str],
    metadata: &M,
    transcripts: &T,
) -> ItemReport
where
    M: MetadataProvider,
    T: TranscriptProvider,
{
    let outcome = match resolve_one(reference, output_dir, languages, metadata, transcripts).await
    {
        Ok((title, path)) => {
            info!(%reference, %title, "transcript saved");
            ItemOutcome::Saved { title, path }
        }
        Err(error) => {
            warn!(%reference, %error, "reference skipped");
            ItemOutcome::Failed { error }
        }
    };

    ItemReport {
        reference: reference.to_string(),
        outcome,
    }
}

/// Process references strictly in order. A failing item is reported and the
/// batch moves on to the next one; errors never escape this function.
pub async fn process_batch<M, T>(
    references: &[String],
    output_dir: &Path,
    languages: &[&str],
    metadata: &M,
    transcripts: &T,
) -> BatchSummary
where
    M: MetadataProvider,
    T: TranscriptProvider,
{
    let mut summary = BatchSummary::default();
    for reference in references {
        let report =
            process_reference(reference, output_dir, languages, metadata, transcripts).await;
        summary.reports.push(report);
    }
    summary
}

async fn resolve_one<M, T>(
    reference: &str,
    output_dir: &Path,
    languages: &[&str],
    metadata: &M,
    transcripts: &T,
) -> Result<(String, PathBuf)>
where
    M: MetadataProvider,
    T: TranscriptProvider,
{
    let video_id = reference::extract_video_id(reference)?;
    let title = metadata.fetch_title(reference).await?;
    let stem = sanitize::sanitize_title(&title);
    let segments = transcripts.fetch_segments(&video_id, languages).await?;
    let path = output::write_transcript(output_dir, &stem, &segments)?;
    Ok((title, path))
}
