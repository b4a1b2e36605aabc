//! Markdown rendering of sanitized turn content
//!
//! The renderer walks a sanitized clone leaf-first: every element is rendered
//! from the already-rendered text of its children, so a `<strong>` inside an
//! `<li>` is wrapped before the list marker is added.
//!
//! # Element rules
//!
//! | Element              | Output                                          |
//! |----------------------|-------------------------------------------------|
//! | `pre`                | blank line, ```` ```lang ````, dedented text, ```` ``` ````, blank line |
//! | `code` (not in pre)  | `` `text` ``                                    |
//! | `li`                 | `- text` + newline                              |
//! | `strong`, `b`        | `**text**`                                      |
//! | `em`, `i`            | `*text*`                                        |
//! | `a` with target      | `[text](absolute url)`, plain text otherwise    |
//! | `p`                  | text + two newlines                             |
//! | `br`                 | newline                                         |
//!
//! Text outside preformatted blocks follows rendered-text rules: whitespace
//! runs collapse to one space, and whitespace-only text next to block
//! elements disappears. Other block elements (`div`, lists, headings, ...)
//! start on their own line. The finished text goes through
//! [`normalize::normalize`].
//!
//! The code block language comes from the class of the inner `code` element:
//! the first occurrence of `language-` is removed and the first remaining
//! token is used (`language-python hljs` → `python`).

pub mod normalize;

use crate::dedent::dedent;
use crate::tree::dom;
use markup5ever_rcdom::{Handle, NodeData};
use url::Url;

const LANGUAGE_PREFIX: &str = "language-";

const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "body",
    "dd",
    "details",
    "dl",
    "dt",
    "div",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "html",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "summary",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

const SKIPPED_TAGS: &[&str] = &["head", "noscript", "script", "style", "template"];

/// Rendered text of a subtree, plus whether it opens with block content
struct Fragment {
    text: String,
    block: bool,
}

impl Fragment {
    fn inline(text: String) -> Self {
        Self { text, block: false }
    }

    fn block(text: String) -> Self {
        Self { text, block: true }
    }
}

/// Converts sanitized markup into Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer<'a> {
    base_url: Option<&'a Url>,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new() -> Self {
        Self { base_url: None }
    }

    /// Resolve relative link targets against `base_url`
    pub fn with_base_url(mut self, base_url: Option<&'a Url>) -> Self {
        self.base_url = base_url;
        self
    }

    /// Render the children of `node` into normalized Markdown
    pub fn render(&self, node: &Handle) -> String {
        normalize::normalize(&self.render_children(node).text)
    }

    fn render_children(&self, parent: &Handle) -> Fragment {
        let children = parent.children.borrow();
        let block_parent = is_block(parent);
        let at_boundary = |sibling: Option<&Handle>| sibling.map_or(block_parent, is_block);

        let mut out = String::new();
        let mut leading_block = None;

        for (index, child) in children.iter().enumerate() {
            if is_blank_text(child) {
                let prev = index.checked_sub(1).and_then(|i| children.get(i));
                let next = children.get(index + 1);
                if at_boundary(prev) || at_boundary(next) {
                    continue;
                }
            }

            let Some(piece) = self.render_node(child) else {
                continue;
            };
            if piece.text.is_empty() {
                continue;
            }

            leading_block.get_or_insert(piece.block);
            if piece.block {
                push_block(&mut out, &piece.text);
            } else {
                let line_start = out.ends_with('\n') || (out.is_empty() && block_parent);
                push_inline(&mut out, &piece.text, line_start);
            }
        }

        Fragment {
            text: out,
            block: leading_block.unwrap_or(false),
        }
    }

    fn render_node(&self, handle: &Handle) -> Option<Fragment> {
        match &handle.data {
            NodeData::Text { contents } => {
                Some(Fragment::inline(collapse_whitespace(&contents.borrow())))
            }
            NodeData::Element { name, .. } => {
                let tag = name.local.as_ref().to_ascii_lowercase();
                if SKIPPED_TAGS.contains(&tag.as_str()) {
                    return None;
                }
                Some(self.render_element(handle, &tag))
            }
            NodeData::Document => Some(self.render_children(handle)),
            _ => None,
        }
    }

    fn render_element(&self, handle: &Handle, tag: &str) -> Fragment {
        match tag {
            "pre" => Fragment::block(render_code_block(handle)),
            "code" => Fragment::inline(wrap(
                &collapse_whitespace(&dom::text_content(handle)),
                "`",
            )),
            "br" => Fragment::inline("\n".to_string()),
            "li" => {
                let inner = self.render_children(handle);
                Fragment::block(format!("- {}\n", inner.text.trim()))
            }
            "p" => {
                let inner = self.render_children(handle);
                Fragment::block(format!("{}\n\n", inner.text.trim()))
            }
            "strong" | "b" => Fragment::inline(wrap(&self.render_children(handle).text, "**")),
            "em" | "i" => Fragment::inline(wrap(&self.render_children(handle).text, "*")),
            "a" => Fragment::inline(self.render_link(handle)),
            _ => {
                let inner = self.render_children(handle);
                if !is_block(handle) {
                    return inner;
                }
                if inner.text.trim().is_empty() {
                    return Fragment::block(String::new());
                }
                Fragment::block(format!("{}\n", inner.text.trim_end_matches(' ')))
            }
        }
    }

    fn render_link(&self, anchor: &Handle) -> String {
        let text = self.render_children(anchor).text;
        let Some(target) = dom::attr(anchor, "href").and_then(|href| self.resolve(&href)) else {
            return text;
        };

        let label = text.trim();
        let label = if label.is_empty() {
            target.as_str()
        } else {
            label
        };
        let (lead, trail) = surrounding_whitespace(&text);
        format!("{lead}[{label}]({target}){trail}")
    }

    /// Absolute targets are kept as written; relative ones are joined onto the
    /// base URL when there is one.
    fn resolve(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        match Url::parse(href) {
            Ok(_) => Some(href.to_string()),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .base_url?
                .join(href)
                .ok()
                .map(String::from),
            Err(_) => None,
        }
    }
}

/// Fenced block for a `<pre>` element
fn render_code_block(pre: &Handle) -> String {
    let language = dom::select_first(pre, &crate::tree::Selector::tag("code"))
        .and_then(|code| dom::attr(&code, "class"))
        .map(|class| language_from_class(&class))
        .unwrap_or_default();
    let code = dedent(&dom::text_content(pre));
    format!("\n\n```{language}\n{code}\n```\n\n")
}

fn language_from_class(class: &str) -> String {
    class
        .replacen(LANGUAGE_PREFIX, "", 1)
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn is_block(handle: &Handle) -> bool {
    dom::element_name(handle).is_some_and(|name| {
        BLOCK_TAGS
            .iter()
            .any(|block| name.eq_ignore_ascii_case(block))
    })
}

fn is_blank_text(handle: &Handle) -> bool {
    match &handle.data {
        NodeData::Text { contents } => contents.borrow().trim().is_empty(),
        _ => false,
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_ascii_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Wrap the non-whitespace core of `text` in `marker`, keeping surrounding
/// whitespace outside the delimiters. Whitespace-only text is returned as is.
fn wrap(text: &str, marker: &str) -> String {
    let core = text.trim();
    if core.is_empty() {
        return text.to_string();
    }
    let (lead, trail) = surrounding_whitespace(text);
    format!("{lead}{marker}{core}{marker}{trail}")
}

fn surrounding_whitespace(text: &str) -> (&str, &str) {
    let lead = &text[..text.len() - text.trim_start().len()];
    let trail = &text[text.trim_end().len()..];
    (lead, trail)
}

fn push_inline(out: &mut String, piece: &str, line_start: bool) {
    if piece.starts_with('\n') {
        let kept = out.trim_end_matches(' ').len();
        out.truncate(kept);
        out.push_str(piece);
    } else if line_start {
        out.push_str(piece.trim_start_matches(' '));
    } else {
        out.push_str(piece);
    }
}

fn push_block(out: &mut String, piece: &str) {
    if !out.is_empty() && !out.ends_with('\n') {
        let kept = out.trim_end_matches(' ').len();
        out.truncate(kept);
        out.push('\n');
    }
    out.push_str(piece);
}
