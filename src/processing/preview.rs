//! Short text preview for report summaries

use unicode_segmentation::UnicodeSegmentation;

const ELLIPSIS: &str = " ...";

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Collapse the head of `text` into a one-line preview.
///
/// Only the first `max_chars` characters are considered. Of those, the first
/// `max_lines` non-empty lines are kept and joined with spaces; an ellipsis
/// marks that more lines followed within the window.
pub fn build_preview(text: &str, max_chars: usize, max_lines: usize) -> String {
    let head: String = text.graphemes(true).take(max_chars).collect();
    let lines: Vec<&str> = head
        .split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut preview = lines.iter().take(max_lines).copied().collect::<Vec<_>>().join(" ");
    if lines.len() > max_lines {
        preview.push_str(ELLIPSIS);
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_lines_without_marker() {
        let text = "Lab Report\n\n  Patient: A  \nDate: today\n";
        assert_eq!(build_preview(text, 1500, 3), "Lab Report Patient: A Date: today");
    }

    #[test]
    fn test_extra_lines_add_marker() {
        let text = "one\ntwo\r\nthree\nfour";
        assert_eq!(build_preview(text, 1500, 3), "one two three ...");
    }

    #[test]
    fn test_window_limits_lines_considered() {
        let text = format!("{}\nsecond\nthird\nfourth", "x".repeat(20));
        // The window ends inside the first line, so nothing else is seen
        assert_eq!(build_preview(&text, 10, 3), "x".repeat(10));
    }

    #[test]
    fn test_window_counts_graphemes() {
        let text = "e\u{301}e\u{301}e\u{301}";
        assert_eq!(build_preview(text, 2, 3), "e\u{301}e\u{301}");
    }
}
