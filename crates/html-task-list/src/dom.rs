//! DOM plumbing over `html5ever`/`markup5ever_rcdom`.
//!
//! The upstream renderer hands this crate body-level fragments, so parsing
//! goes through `parse_document` and the implied `<body>` element acts as
//! the document root; serialization emits a node's children only.

use std::rc::Rc;

use html5ever::serialize::{SerializeOpts, serialize};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{Attribute, QualName, local_name, namespace_url, ns};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::error::{FilterError, Result};

/// Parses a body-level HTML fragment into a full document tree.
pub(crate) fn parse_html(html: &str) -> Result<RcDom> {
    html5ever::parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|err| FilterError::ParseError(err.to_string()))
}

/// Returns the `<body>` element of a parsed document.
pub(crate) fn document_body(dom: &RcDom) -> Option<Handle> {
    let html = child_element(&dom.document, "html")?;
    child_element(&html, "body")
}

/// Serializes a node's children back to HTML.
pub(crate) fn inner_html(node: &Handle) -> String {
    let mut buf = Vec::new();
    let serializable = SerializableHandle::from(Rc::clone(node));
    if serialize(&mut buf, &serializable, SerializeOpts::default()).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Replaces a node's children with the given fragment, reparenting the
/// freshly parsed nodes and orphaning the old ones.
pub(crate) fn set_inner_html(node: &Handle, html: &str) {
    for child in node.children.take() {
        child.parent.set(None);
    }
    let Some(body) = parse_html(html).ok().and_then(|dom| document_body(&dom)) else {
        return;
    };
    let mut children = node.children.borrow_mut();
    for child in body.children.take() {
        child.parent.set(Some(Rc::downgrade(node)));
        children.push(child);
    }
}

/// Removes a node from its parent's child list and clears its back-reference.
pub(crate) fn detach(node: &Handle) {
    let Some(weak) = node.parent.take() else { return };
    if let Some(parent) = weak.upgrade() {
        parent
            .children
            .borrow_mut()
            .retain(|child| !Rc::ptr_eq(child, node));
    }
}

/// Upgrades a node's weak parent link.
pub(crate) fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take()?;
    let parent = weak.upgrade();
    node.parent.set(Some(weak));
    parent
}

pub(crate) fn is_element(node: &Handle, tag: &str) -> bool {
    matches!(node.data, NodeData::Element { ref name, .. } if &*name.local == tag)
}

pub(crate) fn element_name(node: &Handle) -> Option<&str> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(&*name.local),
        _ => None,
    }
}

/// All `li` descendants of `root`, in document order.
pub(crate) fn list_items(root: &Handle) -> Vec<Handle> {
    let mut items = Vec::new();
    collect_list_items(root, &mut items);
    items
}

fn collect_list_items(node: &Handle, items: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        if is_element(child, "li") {
            items.push(Rc::clone(child));
        }
        collect_list_items(child, items);
    }
}

/// The first direct `p` child of a list item, when the renderer produced one.
pub(crate) fn item_paragraph(item: &Handle) -> Option<Handle> {
    child_element(item, "p")
}

fn child_element(node: &Handle, tag: &str) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .find(|child| is_element(child, tag))
        .map(Rc::clone)
}

pub(crate) fn attribute(node: &Handle, name: &str) -> Option<String> {
    let NodeData::Element { ref attrs, .. } = node.data else {
        return None;
    };
    attrs
        .borrow()
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| attr.value.to_string())
}

/// Token-wise `class` attribute check.
pub(crate) fn has_css_class(node: &Handle, class: &str) -> bool {
    attribute(node, "class")
        .is_some_and(|value| value.split_ascii_whitespace().any(|token| token == class))
}

/// Appends a class token to a node's `class` attribute, deduplicating.
pub(crate) fn add_css_class(node: &Handle, class: &str) {
    let NodeData::Element { ref attrs, .. } = node.data else {
        return;
    };
    let mut attrs = attrs.borrow_mut();
    if let Some(attr) = attrs.iter_mut().find(|attr| &*attr.name.local == "class") {
        let mut tokens: Vec<&str> = attr.value.split_ascii_whitespace().collect();
        if tokens.iter().any(|token| *token == class) {
            return;
        }
        tokens.push(class);
        let joined = tokens.join(" ");
        attr.value = StrTendril::from(joined.as_str());
    } else {
        attrs.push(Attribute {
            name: QualName::new(None, ns!(), local_name!("class")),
            value: StrTendril::from(class),
        });
    }
}
