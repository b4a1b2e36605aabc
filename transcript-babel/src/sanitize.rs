//! Noise removal for turn content
//!
//! Rendered turns carry UI chrome next to the transcript text: toolbars,
//! footers, author badges, tooltips, inline icons, citation widgets and the
//! model's internal "thought" blocks. The sanitizer physically detaches those
//! subtrees from a working clone so neither the Markdown nor the markup
//! output can see them.

use crate::tree::{dom, Selector};
use markup5ever_rcdom::Handle;

/// Noise selectors used when no profile overrides them
pub const DEFAULT_NOISE: &[&str] = &[
    "ms-thought-chunk",
    ".actions-container",
    ".turn-footer",
    ".turn-separator",
    ".author-label",
    "ms-tooltip",
    "svg",
    ".citations-container",
];

/// Removes every descendant matching one of its noise selectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitizer {
    noise: Vec<Selector>,
}

impl Sanitizer {
    pub fn new(noise: Vec<Selector>) -> Self {
        Self { noise }
    }

    pub fn noise(&self) -> &[Selector] {
        &self.noise
    }

    /// Detach all noise below `node` and return how many subtrees were removed.
    ///
    /// Must only be called on a caller-owned clone. Selectors are independent
    /// of each other, and running twice removes nothing the second time.
    pub fn sanitize(&self, node: &Handle) -> usize {
        let mut removed = 0;
        for selector in &self.noise {
            for found in dom::select(node, selector) {
                dom::detach(&found);
                removed += 1;
            }
        }
        removed
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(
            DEFAULT_NOISE
                .iter()
                .filter_map(|source| source.parse().ok())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{HtmlSnapshot, TreeSource};

    const NOISY: &str = r#"
        <div class="turn-content">
          <ms-thought-chunk>thinking hard</ms-thought-chunk>
          <div class="author-label">Model</div>
          <p>Answer <svg><path d="M0"></path></svg>text</p>
          <ms-tooltip>copy</ms-tooltip>
          <div class="actions-container"><button>Rerun</button></div>
          <div class="citations-container"><a href="https://src">1</a></div>
          <div class="turn-footer"><span class="turn-separator">|</span></div>
        </div>"#;

    fn content(snapshot: &HtmlSnapshot) -> Handle {
        dom::select_first(&snapshot.root(), &Selector::class("turn-content")).unwrap()
    }

    #[test]
    fn removes_every_noise_kind() {
        let snapshot = HtmlSnapshot::parse(NOISY);
        let clone = dom::deep_clone(&content(&snapshot));

        let removed = Sanitizer::default().sanitize(&clone);

        assert!(removed >= 7);
        let text = dom::text_content(&clone);
        for noise in ["thinking", "Model", "copy", "Rerun", "https", "|"] {
            assert!(!text.contains(noise), "'{noise}' survived: {text}");
        }
        assert!(text.contains("Answer text"));
    }

    #[test]
    fn is_idempotent_and_leaves_source_alone() {
        let snapshot = HtmlSnapshot::parse(NOISY);
        let original = content(&snapshot);
        let clone = dom::deep_clone(&original);
        let sanitizer = Sanitizer::default();

        sanitizer.sanitize(&clone);
        let once = dom::inner_html(&clone);
        assert_eq!(sanitizer.sanitize(&clone), 0);
        assert_eq!(dom::inner_html(&clone), once);

        assert!(dom::text_content(&original).contains("thinking hard"));
    }

    #[test]
    fn no_matches_is_a_no_op() {
        let snapshot = HtmlSnapshot::parse("<p>plain</p>");
        let root = snapshot.root();
        assert_eq!(Sanitizer::default().sanitize(&root), 0);
        assert!(dom::text_content(&root).contains("plain"));
    }

    #[test]
    fn custom_noise_list() {
        let snapshot = HtmlSnapshot::parse(r#"<p>keep</p><aside class="ad">drop</aside>"#);
        let root = snapshot.root();
        let sanitizer = Sanitizer::new(vec![".ad".parse().unwrap()]);
        assert_eq!(sanitizer.sanitize(&root), 1);
        assert!(!dom::text_content(&root).contains("drop"));
    }
}
