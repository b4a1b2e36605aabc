//! Shared fixture helpers

use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::PathBuf;
use transcript_babel::HtmlSnapshot;

/// Read a page from `tests/fixtures`
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()))
}

/// The AI Studio page used across tests
pub fn aistudio() -> HtmlSnapshot {
    HtmlSnapshot::parse(&fixture("aistudio.html"))
}

/// Fixed generation time so headers and file names are stable
pub fn exported_at() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
}
