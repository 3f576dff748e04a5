//! Run a whole reference list and print a structured summary.
//!
//! Usage: cargo run --example batch -- videos.txt out/

use std::path::Path;

#[tokio::main]
async fn main() -> ytscribe::Result<()> {
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "videos.txt".into());
    let output_dir = args.next().unwrap_or_else(|| ytscribe::DEFAULT_OUTPUT_DIR.into());

    let references = ytscribe::input::read_references(&input)?;
    let provider = ytscribe::YouTubeProvider::new()?;

    let summary = ytscribe::process_batch(
        &references,
        Path::new(&output_dir),
        ytscribe::DEFAULT_LANGUAGES,
        &provider,
        &provider,
    )
    .await;

    for report in &summary.reports {
        match &report.outcome {
            ytscribe::ItemOutcome::Saved { title, path } => {
                println!("saved {} -> {}", title, path.display());
            }
            ytscribe::ItemOutcome::Failed { error } => {
                println!("failed {}: {}", report.reference, error);
            }
        }
    }
    println!("{} saved, {} failed", summary.saved(), summary.failed());

    Ok(())
}
