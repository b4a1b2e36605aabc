//! Simple compound selectors
//!
//! Chat markup is classified with a handful of selectors that are either a
//! tag name (`ms-chat-turn`), a class (`.turn-content`), or both
//! (`div.turn-footer`). Anything beyond that (combinators, attributes, ids)
//! is rejected so that profiles stay portable and predictable.

use super::dom;
use crate::error::ExportError;
use markup5ever_rcdom::Handle;
use std::fmt;
use std::str::FromStr;

/// A tag name and/or a set of classes that must all be present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Selector matching elements with the given tag name
    pub fn tag(name: &str) -> Self {
        Self {
            tag: Some(name.to_ascii_lowercase()),
            classes: Vec::new(),
        }
    }

    /// Selector matching elements carrying the given class
    pub fn class(name: &str) -> Self {
        Self {
            tag: None,
            classes: vec![name.to_string()],
        }
    }

    /// Whether `handle` is an element satisfying this selector
    pub fn matches(&self, handle: &Handle) -> bool {
        let Some(name) = dom::element_name(handle) else {
            return false;
        };
        if let Some(tag) = &self.tag {
            if !name.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.classes.iter().all(|class| dom::has_class(handle, class))
    }
}

impl FromStr for Selector {
    type Err = ExportError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let source = source.trim();
        let invalid = || ExportError::InvalidSelector(source.to_string());

        let mut parts = source.split('.');
        let head = parts.next().unwrap_or_default();
        let tag = if head.is_empty() {
            None
        } else {
            Some(head.to_ascii_lowercase())
        };

        let mut classes = Vec::new();
        for class in parts {
            if class.is_empty() {
                return Err(invalid());
            }
            classes.push(class.to_string());
        }

        if tag.is_none() && classes.is_empty() {
            return Err(invalid());
        }

        let valid_ident = |s: &str| {
            s.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };
        if !tag.as_deref().map_or(true, valid_ident) || !classes.iter().all(|c| valid_ident(c)) {
            return Err(invalid());
        }

        Ok(Self { tag, classes })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}
