//! Read-only access to the rendered chat document
//!
//! The extractor never talks to a live page. It receives a [`TreeSource`]:
//! something that can hand out the document root (and optionally the URL the
//! document was rendered from, used to resolve relative links). The shipped
//! implementation is [`HtmlSnapshot`], an HTML snapshot parsed with
//! `html5ever` into an `RcDom`. Tests build snapshots from literal strings.
//!
//! Nodes handed out by a source are never mutated by this crate: every turn is
//! deep-copied with [`dom::deep_clone`] before anything is detached from it.

pub mod dom;
pub mod selector;

pub use selector::Selector;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, RcDom};
use url::Url;

/// A document tree the extractor can read from
pub trait TreeSource {
    /// Root node of the document
    fn root(&self) -> Handle;

    /// Absolute URL the document was rendered from, if known
    fn base_url(&self) -> Option<&Url> {
        None
    }
}

/// A parsed HTML snapshot of a rendered page
pub struct HtmlSnapshot {
    dom: RcDom,
    base_url: Option<Url>,
}

impl HtmlSnapshot {
    /// Parse an HTML document (or fragment) into a snapshot.
    ///
    /// An absolute `<base href>` in the document becomes the base URL.
    pub fn parse(html: &str) -> Self {
        let parsed = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .one(html.as_bytes());

        let base_url = dom::select_first(&parsed.document, &Selector::tag("base"))
            .and_then(|base| dom::attr(&base, "href"))
            .and_then(|href| Url::parse(&href).ok());

        Self {
            dom: parsed,
            base_url,
        }
    }

    /// Override the URL relative links are resolved against
    pub fn with_base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }
}

impl TreeSource for HtmlSnapshot {
    fn root(&self) -> Handle {
        self.dom.document.clone()
    }

    fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_up_absolute_base_href() {
        let snapshot = HtmlSnapshot::parse(
            r#"<html><head><base href="https://aistudio.google.com/app/"></head><body></body></html>"#,
        );
        assert_eq!(
            snapshot.base_url().map(Url::as_str),
            Some("https://aistudio.google.com/app/")
        );
    }

    #[test]
    fn relative_base_href_is_ignored() {
        let snapshot = HtmlSnapshot::parse(r#"<base href="/app/"><p>x</p>"#);
        assert!(snapshot.base_url().is_none());

        let snapshot = snapshot.with_base_url(Url::parse("https://example.com/").unwrap());
        assert_eq!(
            snapshot.base_url().map(Url::as_str),
            Some("https://example.com/")
        );
    }
}
