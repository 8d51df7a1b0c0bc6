//! HTML text → markup tree
//!
//! Parses markup with `html5ever` into an `RcDom`, then copies the `<body>` subtree
//! into a [`MarkupNode`] tree. Comments, doctypes and processing instructions are
//! dropped. Anything the HTML5 algorithm hoists into `<head>` (style, script, meta)
//! is dropped with it.

use crate::ir::nodes::{Element, MarkupNode};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse an HTML fragment or document into a tree rooted at a `body` element.
pub fn parse_html(markup: &str) -> MarkupNode {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(markup);

    let body = find_element(&dom.document, "body");
    let children = body
        .map(|body| convert_children(&body))
        .unwrap_or_default();

    MarkupNode::element("body", children)
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            if name.local.as_ref() == tag {
                return Some(child.clone());
            }
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

fn convert_children(handle: &Handle) -> Vec<MarkupNode> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .collect()
}

fn convert_node(handle: &Handle) -> Option<MarkupNode> {
    match &handle.data {
        NodeData::Text { contents } => Some(MarkupNode::Text(contents.borrow().to_string())),
        NodeData::Element { name, attrs, .. } => {
            let mut element = Element::new(name.local.as_ref());
            for attr in attrs.borrow().iter() {
                element = element.with_attr(attr.name.local.as_ref(), attr.value.to_string());
            }
            Some(MarkupNode::Element(
                element.with_children(convert_children(handle)),
            ))
        }
        _ => None,
    }
}
