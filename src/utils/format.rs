use chrono::{DateTime, Local};
use serde::Serializer;

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FILE_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Round to the given number of decimal places, sending exact halves to the even digit
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Scores are always shown with three decimals
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Truncate to at most `max_chars` characters, marking the cut with "..."
pub fn truncate_string(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

/// Collapse newlines and runs of whitespace so a text fits on one table row
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn serialize<S>(date: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(FORMAT).to_string())
}

pub fn format_datetime(dt: &DateTime<Local>) -> String {
    dt.format(FORMAT).to_string()
}

/// Timestamp suitable for file names, e.g. `20250101-093000`
pub fn file_stamp(dt: &DateTime<Local>) -> String {
    dt.format(FILE_STAMP_FORMAT).to_string()
}
