//! Display-width helpers for terminal text.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let ellipsis_width = 1;
    let target_width = max_width.saturating_sub(ellipsis_width);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

/// Offset that centers `text_width` inside `available_width`.
pub fn center_offset(text_width: usize, available_width: usize) -> usize {
    if text_width >= available_width {
        return 0;
    }
    (available_width - text_width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_counts_columns() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("héllo"), 5);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_respects_wide_characters() {
        // the second ideograph does not fit in front of the ellipsis
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(4, 10), 3);
        assert_eq!(center_offset(10, 10), 0);
        assert_eq!(center_offset(12, 10), 0);
    }
}
