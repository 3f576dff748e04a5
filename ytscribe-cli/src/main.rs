use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ytscribe::{batch, Error, ItemOutcome, YouTubeProvider};

#[derive(Parser)]
#[command(
    name = "ytscribe",
    about = "Fetch YouTube transcripts for a list of video URLs"
)]
struct Cli {
    /// File with one video URL per line (blank lines ignored).
    #[arg(default_value = "videos.txt")]
    input: PathBuf,

    /// Directory the .txt transcript files are written to.
    #[arg(short, long, default_value = batch::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Preferred transcript language (repeatable, first match wins).
    #[arg(short, long, default_value = "en")]
    language: Vec<String>,

    /// Disable TLS certificate verification for this run's HTTP client.
    #[arg(long)]
    insecure: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ytscribe=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let references = match ytscribe::input::read_references(&cli.input) {
        Ok(references) => references,
        Err(e @ Error::MissingInput { .. }) => {
            eprintln!("Error: {e}");
            eprintln!("Create it with one YouTube URL per line.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.insecure {
        eprintln!("Warning: TLS certificate verification disabled for this run");
    }

    let provider = match YouTubeProvider::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .build()
    {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let languages: Vec<&str> = cli.language.iter().map(String::as_str).collect();

    let pb = ProgressBar::new(references.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len}")
            .expect("valid template")
            .progress_chars("#>-"),
    );

    let mut saved = 0usize;
    let mut failed = 0usize;

    for reference in &references {
        let report = batch::process_reference(
            reference,
            &cli.output_dir,
            &languages,
            &provider,
            &provider,
        )
        .await;

        match &report.outcome {
            ItemOutcome::Saved { title, .. } => {
                saved += 1;
                pb.println(format!("✅ {title}"));
            }
            ItemOutcome::Failed { error } => {
                failed += 1;
                pb.println(format!("❌ {reference}: {error}"));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    println!(
        "{saved} saved, {failed} failed — transcripts in {}",
        cli.output_dir.display()
    );
}
