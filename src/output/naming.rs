//! File naming for exported pages

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

/// Timestamp layout appended to every file name
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Everything outside ASCII letters, digits, space, `-` and `_`
static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 _-]").unwrap());

/// Strip a title down to file-name-safe characters
///
/// Keeps `[A-Za-z0-9 _-]`, drops everything else, then trims trailing
/// whitespace. The result may be empty.
pub fn sanitize_title(title: &str) -> String {
    UNSAFE_CHARS.replace_all(title, "").trim_end().to_string()
}

/// `<sanitized-title>_<YYYYmmdd_HHMMSS>.pdf`
pub fn pdf_file_name(title: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.pdf", sanitize_title(title), at.format(TIMESTAMP_FORMAT))
}
