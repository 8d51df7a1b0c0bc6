//! Markdown serialization (HTML tree → Markdown)
//!
//! Depth-first walk: children are rendered first, then the element's rule kind
//! decides how that content is wrapped. Non-content elements are removed before
//! the walk so their text never reaches the output.

use super::InverseTable;
use crate::ir::nodes::{Element, MarkupNode};
use crate::rules::{ListMarker, RuleKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Elements whose content is never rendered.
pub const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

static LANGUAGE_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"language-([\w-]+)").unwrap());
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Convert a markup tree to Markdown.
pub fn markup_to_markdown(tree: &MarkupNode, table: &InverseTable) -> String {
    let markdown = strip_non_content(tree)
        .map(|tree| render_node(&tree, table))
        .unwrap_or_default();
    BLANK_RUNS
        .replace_all(markdown.trim(), "\n\n")
        .into_owned()
}

fn strip_non_content(node: &MarkupNode) -> Option<MarkupNode> {
    match node {
        MarkupNode::Text(_) => Some(node.clone()),
        MarkupNode::Element(element) if NON_CONTENT_TAGS.contains(&element.tag.as_str()) => None,
        MarkupNode::Element(element) => Some(MarkupNode::Element(Element {
            tag: element.tag.clone(),
            attributes: element.attributes.clone(),
            children: element.children.iter().filter_map(strip_non_content).collect(),
        })),
    }
}

fn render_node(node: &MarkupNode, table: &InverseTable) -> String {
    match node {
        MarkupNode::Text(text) => text.clone(),
        MarkupNode::Element(element) => render_element(element, table),
    }
}

fn render_children(element: &Element, table: &InverseTable) -> String {
    element
        .children
        .iter()
        .map(|child| render_node(child, table))
        .collect()
}

fn render_element(element: &Element, table: &InverseTable) -> String {
    let Some(kind) = table.kind(&element.tag) else {
        return render_children(element, table);
    };

    match kind {
        RuleKind::Image => format!(
            "![{}]({})",
            element.attr("alt").unwrap_or_default(),
            element.attr("src").unwrap_or_default()
        ),
        RuleKind::Fence { open, close } => render_fence(element, open, close, table),
        RuleKind::LineBreak => "  \n".to_string(),
        _ => {
            let content = render_children(element, table);
            match kind {
                RuleKind::InlineWrap { token } => format!("{token}{content}{token}"),
                RuleKind::Link => format!(
                    "[{content}]({})",
                    element.attr("href").unwrap_or_default()
                ),
                RuleKind::BlockPrefix {
                    token,
                    every_line: true,
                } => {
                    let quoted: Vec<String> = content
                        .trim_end_matches('\n')
                        .split('\n')
                        .map(|line| format!("{token}{line}"))
                        .collect();
                    format!("{}\n\n", quoted.join("\n"))
                }
                RuleKind::BlockPrefix { token, .. } => format!("{token}{content}\n\n"),
                RuleKind::ListItem => format!("{content}\n"),
                RuleKind::ListContainer { marker } => render_list(&content, marker),
                _ => content,
            }
        }
    }
}

fn render_fence(element: &Element, open: &str, close: &str, table: &InverseTable) -> String {
    let code_element = element.find_descendant("code");
    let code = match code_element {
        Some(code_element) => render_children(code_element, table),
        None => render_children(element, table),
    };
    let language = code_element
        .and_then(language_of)
        .or_else(|| language_of(element))
        .unwrap_or_default();

    format!("\n\n{open}{language}\n{code}\n{close}\n\n")
}

fn language_of(element: &Element) -> Option<&str> {
    let class = element.attr("class")?;
    LANGUAGE_CLASS
        .captures(class)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}

/// Prefix every non-blank line of the joined item content with a list marker.
///
/// Lines keep their own whitespace, so hard-break markers survive.
fn render_list(content: &str, marker: &ListMarker) -> String {
    let items: Vec<String> = content
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| format!("{}{line}", marker.marker(index)))
        .collect();
    format!("{}\n\n", items.join("\n"))
}
