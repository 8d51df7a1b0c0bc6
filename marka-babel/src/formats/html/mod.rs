//! HTML output (Markdown → HTML)
//!
//! Renders the Markdown dialect into HTML markup, one block element per source
//! line, driven by the merged mapping table.
//!
//! # Element Mapping Table
//!
//! Built-in fallback rules, used when no mapping source yields any rule:
//!
//! | Markdown token | HTML element                   | Notes                                   |
//! |----------------|--------------------------------|-----------------------------------------|
//! | `# `           | `<h1>`                         |                                         |
//! | `## `          | `<h2>`                         |                                         |
//! | `### `         | `<h3>`                         |                                         |
//! | `> `           | `<blockquote>`                 | One element per line                    |
//! | `---`          | `<hr>`                         |                                         |
//! | `- ` / `* `    | `<li>` inside `<ul>`           | Consecutive lines share one container   |
//! | `1. `          | `<li>` inside `<ol>`           |                                         |
//! | `` ``` ``      | `<pre><code>`                  | Info string → `class="language-…"`      |
//! | anything else  | `<p>`                          |                                         |
//!
//! Inline spans (bold, italic, code, image, link) are handled by [`inline`]
//! regardless of the table. The fallback table deliberately has no image or link
//! rules; the inverse table in [`crate::formats::markdown`] does.
//!
//! # Lossy Conversions
//!
//! - Line terminators and trailing whitespace are not preserved
//! - Blank lines become empty paragraphs
//! - Content after an unterminated fence is dropped

pub mod inline;
mod serializer;

pub use serializer::markdown_to_markup;

use crate::rules::MappingRule;

/// Rules used by the Markdown → HTML direction when the registry yields none.
pub fn fallback_rules() -> Vec<MappingRule> {
    vec![
        MappingRule::new("# ", "h1"),
        MappingRule::new("## ", "h2"),
        MappingRule::new("### ", "h3"),
        MappingRule::new("> ", "blockquote"),
        MappingRule::new("---", "hr"),
        MappingRule::new("- ", "li").grouped("ul"),
        MappingRule::new("* ", "li").grouped("ul"),
        MappingRule::new("1. ", "li").grouped("ol"),
        MappingRule::new("```", "pre")
            .grouped("codeblock")
            .with_language_hint(),
    ]
}
