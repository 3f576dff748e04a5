use crate::error::{Error, Result};

/// Extract the video id from a reference URL.
///
/// For `watch?v=<id>` style URLs the id is the exact substring after `v=` up
/// to the next `&` (or end of string) — no percent-decoding. `youtu.be/<id>`
/// short links are also accepted, with the id ending at `?` or end of string.
///
/// A reference carrying neither marker is a [`Error::MalformedReference`],
/// never a panic.
pub fn extract_video_id(reference: &str) -> Result<String> {
    if let Some((_, rest)) = reference.split_once("v=") {
        let id = rest.split('&').next().unwrap_or(rest);
        return Ok(id.to_string());
    }

    if let Some((_, rest)) = reference.split_once("youtu.be/") {
        let id = rest.split('?').next().unwrap_or(rest);
        if !id.is_empty() {
            return Ok(id.to_string());
        }
    }

    Err(Error::MalformedReference {
        reference: reference.to_string(),
    })
}
