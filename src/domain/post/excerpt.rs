//! Plain-text excerpts of markdown bodies.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::Timestamp;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"#+\s+").expect("heading regex"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("link regex"));
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*_~`]").expect("emphasis regex"));

/// Strips common markdown syntax and truncates to `max_chars` characters.
///
/// Truncated excerpts end with `...`. Lengths count Unicode scalar values.
pub fn excerpt(markdown: &str, max_chars: usize) -> String {
    let text = HEADING.replace_all(markdown, "");
    let text = LINK.replace_all(&text, "$1");
    let text = EMPHASIS.replace_all(&text, "");
    let text = text.replace('\n', " ");
    let text = text.trim();

    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim())
}

/// Display date for post pages and newsletters, e.g. `March 5, 2024`.
pub fn format_long_date(ts: &Timestamp) -> String {
    ts.to_long_date()
}
