//! Core data structures for the markup tree.

use std::collections::BTreeMap;

/// A node of an already-parsed markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Text(String),
    Element(Element),
}

/// An element with a tag name, attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, lower-cased on construction.
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    pub fn text(text: impl Into<String>) -> Self {
        MarkupNode::Text(text.into())
    }

    /// Element node with no attributes and the given children.
    pub fn element(tag: &str, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Element(Element::new(tag).with_children(children))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            MarkupNode::Element(element) => Some(element),
            MarkupNode::Text(_) => None,
        }
    }
}

impl From<Element> for MarkupNode {
    fn from(element: Element) -> Self {
        MarkupNode::Element(element)
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<MarkupNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: Vec<MarkupNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First descendant element with the given tag, depth-first.
    pub fn find_descendant(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find_map(|child| match child {
            MarkupNode::Element(element) if element.tag == tag => Some(element),
            MarkupNode::Element(element) => element.find_descendant(tag),
            MarkupNode::Text(_) => None,
        })
    }
}
