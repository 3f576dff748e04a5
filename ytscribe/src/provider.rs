use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::Segment;

const OEMBED_URL: &str = "https://www.youtube.com/oembed";
const WATCH_URL: &str = "https://www.youtube.com/watch";
const PLAYER_RESPONSE_MARKER: &str = "ytInitialPlayerResponse = ";

// YouTube serves a reduced page (without the player response blob) to
// clients it doesn't recognize as browsers.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";

/// Capability: resolve a human-readable title for a video reference.
#[allow(async_fn_in_trait)]
pub trait MetadataProvider {
    async fn fetch_title(&self, reference: &str) -> Result<String>;
}

/// Capability: fetch caption cues for a video in the first matching preferred
/// language.
#[allow(async_fn_in_trait)]
pub trait TranscriptProvider {
    async fn fetch_segments(&self, video_id: &str, languages: &[&str]) -> Result<Vec<Segment>>;
}

#[derive(Deserialize)]
struct OembedInfo {
    title: String,
}

/// Both capabilities backed by youtube.com over one HTTP client.
///
/// Titles come from the oEmbed endpoint; transcripts from the caption track
/// list embedded in the watch page.
pub struct YouTubeProvider {
    client: reqwest::Client,
}

impl YouTubeProvider {
    /// Provider with default TLS settings (certificate verification on).
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> YouTubeProviderBuilder {
        YouTubeProviderBuilder {
            accept_invalid_certs: false,
        }
    }
}

pub struct YouTubeProviderBuilder {
    accept_invalid_certs: bool,
}

impl YouTubeProviderBuilder {
    /// Disable TLS certificate verification for this client only.
    ///
    /// Never a process-wide default — the override dies with the client.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> Result<YouTubeProvider> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()?;
        Ok(YouTubeProvider { client })
    }
}

impl MetadataProvider for YouTubeProvider {
    async fn fetch_title(&self, reference: &str) -> Result<String> {
        debug!(%reference, "fetching title via oEmbed");

        let response = self
            .client
            .get(OEMBED_URL)
            .query(&[("url", reference), ("format", "json")])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Provider(format!("title lookup failed: {e}")))?;

        let info: OembedInfo = response.json().await?;
        Ok(info.title)
    }
}

impl TranscriptProvider for YouTubeProvider {
    async fn fetch_segments(&self, video_id: &str, languages: &[&str]) -> Result<Vec<Segment>> {
        info!(%video_id, "fetching caption track list");

        let html = self
            .client
            .get(WATCH_URL)
            .query(&[("v", video_id)])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Provider(format!("watch page fetch failed: {e}")))?
            .text()
            .await?;

        let player_json = extract_player_response(&html).ok_or_else(|| {
            Error::Provider(format!("no player data in watch page for {video_id}"))
        })?;
        let player: Value = serde_json::from_str(player_json)?;

        let unavailable = || Error::TranscriptUnavailable {
            video_id: video_id.to_string(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
        };

        let tracks = player
            .get("captions")
            .and_then(|c| c.get("playerCaptionsTracklistRenderer"))
            .and_then(|p| p.get("captionTracks"))
            .and_then(Value::as_array)
            .ok_or_else(unavailable)?;

        let track_url = select_track(tracks, languages).ok_or_else(unavailable)?;

        debug!(%video_id, "downloading timedtext");
        let xml = self
            .client
            .get(track_url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Provider(format!("timedtext fetch failed: {e}")))?
            .text()
            .await?;

        let segments = parse_timedtext(&xml);
        if segments.is_empty() {
            return Err(unavailable());
        }
        Ok(segments)
    }
}

/// Pull the `ytInitialPlayerResponse` JSON blob out of the watch page HTML.
fn extract_player_response(html: &str) -> Option<&str> {
    let start = html.find(PLAYER_RESPONSE_MARKER)? + PLAYER_RESPONSE_MARKER.len();
    let rest = &html[start..];
    let end = rest.find(";</script>").unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Pick the caption track for the first preferred language that has one.
/// Manually created tracks win over auto-generated ("asr") ones.
fn select_track<'a>(tracks: &'a [Value], languages: &[&str]) -> Option<&'a str> {
    for require_manual in [true, false] {
        for lang in languages {
            for track in tracks {
                if track.get("languageCode").and_then(Value::as_str) != Some(*lang) {
                    continue;
                }
                let generated = track.get("kind").and_then(Value::as_str) == Some("asr");
                if require_manual && generated {
                    continue;
                }
                if let Some(url) = track.get("baseUrl").and_then(Value::as_str) {
                    return Some(url);
                }
            }
        }
    }
    None
}

/// Parse timedtext XML into cues. The payload is flat enough that a regex
/// beats pulling in a full XML parser; cues with unparsable timing are skipped.
fn parse_timedtext(xml: &str) -> Vec<Segment> {
    let re = regex::Regex::new(r#"<text start="([^"]+)" dur="([^"]+)"[^>]*>([^<]*)</text>"#)
        .expect("valid regex");

    let mut segments = Vec::new();
    for cap in re.captures_iter(xml) {
        let (Ok(start), Ok(duration)) = (cap[1].parse::<f64>(), cap[2].parse::<f64>()) else {
            continue;
        };
        let text = html_escape::decode_html_entities(&cap[3]).into_owned();
        segments.push(Segment {
            text,
            start,
            duration,
        });
    }
    segments
}
