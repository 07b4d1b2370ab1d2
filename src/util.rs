//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to at most `max_width` terminal columns.
///
/// Wide characters (CJK, most emoji) count as two columns. When the string
/// has to be cut, the last column is replaced by `…` so the reader can tell
/// the text continues.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_to_width("YOASOBI", 10), "YOASOBI");
/// assert_eq!(truncate_to_width("周杰倫演唱會", 7), "周杰倫…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate (if needed) and right-pad with spaces to exactly `width` columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = out.width();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Center `s` inside `width` columns (truncating if it does not fit).
pub fn center_to_width(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let free = width.saturating_sub(text.width());
    let left = free / 2;
    let right = free - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
