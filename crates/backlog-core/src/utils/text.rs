use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncate `text` to `max_width` terminal columns, ending with `...` when cut.
///
/// Wide characters (CJK) count as two columns.
///
/// # Examples
/// ```
/// use backlog_core::utils::text::truncate_text;
/// assert_eq!(truncate_text("Hello, World!", 8), "Hello...");
/// assert_eq!(truncate_text("短い", 10), "短い");
/// ```
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis_width = ELLIPSIS.width();
    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

/// First non-blank line of a multi-line body, used for one-row summaries.
pub fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}
