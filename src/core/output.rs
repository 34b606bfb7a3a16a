//! Compact output rendering helpers for CLI surfaces.
//!
//! Cleanup summaries can carry many per-file failure messages; these helpers
//! keep the printed form bounded while preserving signal.

/// Collapse newlines/extra whitespace and bound length for terminal display.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// One-line preview of skipped/failed items: first few entries compacted,
/// with an overflow counter when more exist.
pub fn preview_skipped(items: &[String], max_items: usize) -> String {
    const MAX_CHARS: usize = 96;
    if items.is_empty() {
        return String::new();
    }
    let shown = items
        .iter()
        .take(max_items)
        .map(|m| compact_line(m, MAX_CHARS))
        .collect::<Vec<_>>()
        .join(" | ");
    if items.len() > max_items {
        format!("{} (+{} more)", shown, items.len() - max_items)
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_line_collapses_and_bounds() {
        assert_eq!(compact_line("a\n b\t c", 100), "a b c");
        assert_eq!(compact_line("abcdef", 3), "abc...");
        assert_eq!(compact_line("abc", 3), "abc");
    }

    #[test]
    fn preview_skipped_counts_overflow() {
        let msgs = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        assert_eq!(preview_skipped(&msgs, 2), "one | two (+1 more)");
        assert_eq!(preview_skipped(&[], 2), "");
    }
}
