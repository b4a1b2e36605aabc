//! Final whitespace pass over rendered Markdown

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapse every run of three or more newlines to exactly two, then trim
/// the ends. Lines are otherwise left alone, so code block contents keep
/// their whitespace.
pub fn normalize(markdown: &str) -> String {
    BLANK_RUNS.replace_all(markdown, "\n\n").trim().to_string()
}
