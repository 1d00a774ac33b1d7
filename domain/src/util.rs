//! Shared utility functions.

/// Truncate a string to at most `max_bytes`, cutting only at UTF-8
/// character boundaries.
///
/// Returns a sub-slice of the original string; input shorter than the
/// limit comes back unchanged. Used to keep log previews bounded without
/// ever splitting a multi-byte character.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= max_bytes)
        .last()
        .unwrap_or(0);
    &s[..cut]
}
