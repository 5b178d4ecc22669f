//! Text helpers for log lines.

/// Cut `s` to at most `max_bytes`, backing off to the previous UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview of a model reply or HTTP body for `debug!` output.
///
/// Line breaks become spaces and a trailing `...` marks a cut.
pub fn log_preview(s: &str, max_bytes: usize) -> String {
    let flat = s.trim().replace(['\r', '\n'], " ");
    let cut = truncate_str(&flat, max_bytes);
    if cut.len() < flat.len() {
        format!("{}...", cut)
    } else {
        flat
    }
}
