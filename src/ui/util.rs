use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::tax::round_naira;

/// Whole naira with thousand separators, no sign. e.g. `1234567` → `"1,234,567"`
fn group_thousands(val: i64) -> String {
    let digits = val.unsigned_abs().to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

fn signed(val: i64, symbol: &str) -> String {
    if val < 0 {
        format!("-{symbol}{}", group_thousands(val))
    } else {
        format!("{symbol}{}", group_thousands(val))
    }
}

/// Format an amount as whole naira, rounded half away from zero.
/// e.g. `881599.83` → `"₦881,600"`
pub(crate) fn format_naira<T: Into<Decimal>>(val: T) -> String {
    signed(round_naira(val.into()), "₦")
}

/// Like [`format_naira`] but with an ASCII currency code, for output whose
/// fonts cannot draw `₦`.
pub(crate) fn format_ngn<T: Into<Decimal>>(val: T) -> String {
    signed(round_naira(val.into()), "NGN ")
}

/// `dd/mm/yyyy`, the way dates appear in chat and on the report.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Word-wrap `text` to lines of at most `width` characters. Explicit newlines
/// are kept; words longer than a line are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut len = 0;
        for word in raw.split(' ') {
            let word_len = word.chars().count();
            if len > 0 && len + 1 + word_len > width {
                out.push(std::mem::take(&mut line));
                len = 0;
            } else if len > 0 {
                line.push(' ');
                len += 1;
            }
            for c in word.chars() {
                if len == width {
                    out.push(std::mem::take(&mut line));
                    len = 0;
                }
                line.push(c);
                len += 1;
            }
        }
        out.push(line);
    }
    out
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page.saturating_sub(1));
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}
