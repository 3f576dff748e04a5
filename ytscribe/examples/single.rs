//! Fetch one transcript and print it.
//!
//! Usage: cargo run --example single -- https://www.youtube.com/watch?v=dQw4w9WgXcQ

#[tokio::main]
async fn main() -> ytscribe::Result<()> {
    let reference = std::env::args()
        .nth(1)
        .expect("usage: single <video-url>");

    let transcript = ytscribe::fetch_transcript(&reference).await?;

    eprintln!("{} ({} segments)", transcript.title, transcript.segments.len());
    println!("{}", transcript.text());

    Ok(())
}
