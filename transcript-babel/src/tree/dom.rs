//! Helpers over `markup5ever_rcdom` handles
//!
//! The rcdom tree is a plain `Rc` graph without query helpers, so everything
//! the extractor needs (class lookups, descendant selection, detaching,
//! deep copies, text extraction) lives here.

use super::selector::Selector;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::{ns, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Local tag name of an element, `None` for every other node kind
pub fn element_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Whether `handle` is an element with the given tag name
pub fn is_element(handle: &Handle, tag: &str) -> bool {
    element_name(handle).is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Value of an attribute, if the node is an element carrying it
pub fn attr(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Replace (or add) an attribute on an element; other nodes are ignored
pub fn set_attr(handle: &Handle, name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &handle.data {
        let mut attrs = attrs.borrow_mut();
        match attrs.iter_mut().find(|attr| attr.name.local.as_ref() == name) {
            Some(existing) => existing.value = value.to_string().into(),
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(name)),
                value: value.to_string().into(),
            }),
        }
    }
}

/// Whitespace-separated class list
pub fn classes(handle: &Handle) -> Vec<String> {
    attr(handle, "class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn has_class(handle: &Handle, class: &str) -> bool {
    attr(handle, "class").is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

/// All descendants (not `handle` itself) matching `selector`, in document order
pub fn select(handle: &Handle, selector: &Selector) -> Vec<Handle> {
    let mut found = Vec::new();
    collect_matches(handle, selector, &mut found);
    found
}

fn collect_matches(handle: &Handle, selector: &Selector, found: &mut Vec<Handle>) {
    for child in handle.children.borrow().iter() {
        if selector.matches(child) {
            found.push(child.clone());
        }
        collect_matches(child, selector, found);
    }
}

/// First descendant matching `selector` in document order
pub fn select_first(handle: &Handle, selector: &Selector) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if selector.matches(child) {
            return Some(child.clone());
        }
        if let Some(found) = select_first(child, selector) {
            return Some(found);
        }
    }
    None
}

/// Remove `handle` from its parent. Nodes without a live parent are left alone.
pub fn detach(handle: &Handle) {
    let Some(weak) = handle.parent.take() else {
        return;
    };
    if let Some(parent) = weak.upgrade() {
        parent
            .children
            .borrow_mut()
            .retain(|child| !Rc::ptr_eq(child, handle));
    }
}

/// Deep copy of a subtree. The copy has no parent and shares no nodes with
/// the original, so mutating it never affects the source document.
pub fn deep_clone(handle: &Handle) -> Handle {
    let data = match &handle.data {
        NodeData::Document => NodeData::Document,
        NodeData::Doctype {
            name,
            public_id,
            system_id,
        } => NodeData::Doctype {
            name: name.clone(),
            public_id: public_id.clone(),
            system_id: system_id.clone(),
        },
        NodeData::Text { contents } => NodeData::Text {
            contents: RefCell::new(contents.borrow().clone()),
        },
        NodeData::Comment { contents } => NodeData::Comment {
            contents: contents.clone(),
        },
        NodeData::Element {
            name,
            attrs,
            template_contents,
            mathml_annotation_xml_integration_point,
        } => NodeData::Element {
            name: name.clone(),
            attrs: RefCell::new(attrs.borrow().clone()),
            template_contents: RefCell::new(template_contents.borrow().as_ref().map(deep_clone)),
            mathml_annotation_xml_integration_point: *mathml_annotation_xml_integration_point,
        },
        NodeData::ProcessingInstruction { target, contents } => {
            NodeData::ProcessingInstruction {
                target: target.clone(),
                contents: contents.clone(),
            }
        }
    };

    let copy = Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data,
    });

    for child in handle.children.borrow().iter() {
        let child_copy = deep_clone(child);
        child_copy.parent.set(Some(Rc::downgrade(&copy)));
        copy.children.borrow_mut().push(child_copy);
    }

    copy
}

/// Raw text of a subtree with `<br>` turned into newlines.
///
/// Whitespace is kept exactly as authored, which is what preformatted blocks
/// need.
pub fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    collect_text(handle, &mut text);
    text
}

fn collect_text(handle: &Handle, text: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => text.push_str(&contents.borrow()),
        NodeData::Element { .. } if is_element(handle, "br") => text.push('\n'),
        NodeData::Element { .. } | NodeData::Document => {
            for child in handle.children.borrow().iter() {
                collect_text(child, text);
            }
        }
        _ => {}
    }
}

/// Serialize the children of `handle` (its inner HTML)
pub fn inner_html(handle: &Handle) -> String {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    let serializable = SerializableHandle::from(handle.clone());
    if let Err(e) = serialize(&mut output, &serializable, opts) {
        tracing::warn!("HTML serialization failed: {e}");
        return String::new();
    }
    String::from_utf8(output).unwrap_or_default()
}
