use std::fmt::Write;

use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

/// Format a date with a user-supplied chrono pattern, falling back to ISO
/// when the pattern is invalid
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        log::warn!("Invalid date format {:?}, falling back to ISO", pattern);
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Format a progress fraction as a percentage with one decimal, e.g. "12.3%"
pub fn format_percent(progress: f64) -> String {
    format!("{:.1}%", progress * 100.0)
}

/// Create a simple text progress bar; the ratio is clamped to 0..=1
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Right-pad to a display width, counting wide glyphs as two columns
pub fn pad_display(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}
