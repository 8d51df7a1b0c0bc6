//! Markup tree representation.
//!
//! The inverse converter walks a [`nodes::MarkupNode`] tree and has no dependency on
//! any particular markup parser. [`from_html`] builds such a tree from an HTML
//! fragment for callers that hold markup as text.

pub mod from_html;
pub mod nodes;
