use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Display width of a single character in terminal columns.
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Truncate a string so its display width fits within `max_width` columns.
/// Wide characters are never split in half.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }

    let mut width = 0;
    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        let w = char_width(ch);
        if width + w > max_width {
            break;
        }
        width += w;
        end = idx + ch.len_utf8();
    }
    &text[..end]
}
