// Reporting — terminal display and sidecar persistence.

pub mod sidecar;
pub mod terminal;

/// Collapse whitespace runs and truncate to at most `max_chars` characters,
/// appending "..." if truncated.
///
/// Used for one-line previews of text file content. Counts characters, not
/// bytes, so multi-byte input never panics a slice.
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let truncated: String = collapsed.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
