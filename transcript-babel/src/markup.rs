//! Styled markup snapshot of a sanitized turn
//!
//! The PDF page is built from each turn's own markup rather than from the
//! Markdown. Preformatted blocks get explicit wrapping styles so long lines
//! do not overflow the page when printed.

use crate::tree::{dom, Selector};
use markup5ever_rcdom::Handle;

/// Style applied to every `<pre>` in the markup snapshot
pub const PRE_STYLE: &str =
    "white-space: pre-wrap; word-wrap: break-word; font-family: Consolas, Monaco, \"Courier New\", monospace;";

/// Annotate preformatted blocks below `node` and serialize its inner HTML.
///
/// Existing inline styles on a `<pre>` are kept, with the wrap rules appended
/// so they win.
pub fn render_markup(node: &Handle) -> String {
    for pre in dom::select(node, &Selector::tag("pre")) {
        let style = match dom::attr(&pre, "style") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{}; {PRE_STYLE}", existing.trim().trim_end_matches(';'))
            }
            _ => PRE_STYLE.to_string(),
        };
        dom::set_attr(&pre, "style", &style);
    }
    dom::inner_html(node)
}
