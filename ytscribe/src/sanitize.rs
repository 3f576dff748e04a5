/// Reduce a video title to a filesystem-safe filename stem.
///
/// Keeps ASCII alphanumerics, spaces, and hyphens; every other character is
/// dropped. Trailing whitespace is trimmed. Idempotent. No length cap and no
/// collision handling — two videos sanitizing to the same stem overwrite each
/// other, last writer wins.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect::<String>()
        .trim_end()
        .to_string()
}
