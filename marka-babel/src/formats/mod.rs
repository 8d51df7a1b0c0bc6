//! Format implementations
//!
//! One module per output direction: [`html`] renders Markdown into HTML,
//! [`markdown`] walks an HTML tree back into Markdown. Neither depends on the
//! other; both read the rule table produced by the registry.

pub mod html;
pub mod markdown;

pub use html::markdown_to_markup;
pub use markdown::{markup_to_markdown, InverseTable};
