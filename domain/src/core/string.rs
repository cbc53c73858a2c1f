//! String utilities for the domain layer.

/// Collapse a reply to a single line and cut it at `max_chars` characters.
///
/// Whitespace runs (including newlines) become a single space. An ellipsis
/// is appended when the text was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}
