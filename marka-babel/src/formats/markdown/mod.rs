//! Markdown output (HTML tree → Markdown)
//!
//! Walks a [`MarkupNode`](crate::ir::nodes::MarkupNode) tree depth-first and emits
//! the Markdown dialect. What each tag turns into is decided by an
//! [`InverseTable`], a lookup from tag name to [`RuleKind`].
//!
//! # Element Mapping Table
//!
//! Built-in fallback rules:
//!
//! | HTML element           | Markdown                  | Kind            |
//! |------------------------|---------------------------|-----------------|
//! | `strong`, `b`          | `**text**`                | InlineWrap      |
//! | `em`, `i`              | `*text*`                  | InlineWrap      |
//! | `code`                 | `` `text` ``              | InlineWrap      |
//! | `pre`                  | ```` ```lang … ``` ````   | Fence           |
//! | `h1` … `h6`            | `# ` … `###### `          | BlockPrefix     |
//! | `blockquote`           | `> ` on every line        | BlockPrefix     |
//! | `p`                    | text + blank line         | BlockPrefix     |
//! | `hr`                   | `---`                     | BlockPrefix     |
//! | `ul` / `ol`            | `- ` / `1. `, `2. ` …     | ListContainer   |
//! | `li`                   | one line                  | ListItem        |
//! | `a`                    | `[text](href)`            | Link            |
//! | `img`                  | `![alt](src)`             | Image           |
//! | `br`                   | two spaces + newline      | LineBreak       |
//! | anything else          | children only             | pass-through    |
//!
//! Rules loaded from mapping sources are layered over this table; the first loaded
//! rule naming a tag wins. An empty load therefore yields exactly the fallback.
//!
//! # Lossy Conversions
//!
//! - Attributes other than `href`, `src`, `alt` and the code language class are lost
//! - Nested lists are flattened into their parent list
//! - Three or more consecutive newlines collapse to one blank line

mod serializer;

pub use serializer::{markup_to_markdown, NON_CONTENT_TAGS};

use crate::rules::{MappingRule, RuleKind};
use std::collections::HashMap;

/// Lookup from tag name to rendering behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InverseTable {
    kinds: HashMap<String, RuleKind>,
}

impl InverseTable {
    /// The built-in table alone.
    pub fn fallback() -> Self {
        Self::from_rules(&[])
    }

    /// Layer loaded rules over the built-in table.
    pub fn from_rules(rules: &[MappingRule]) -> Self {
        let mut table = InverseTable {
            kinds: HashMap::new(),
        };
        for rule in rules.iter().chain(fallback_rules().iter()) {
            table.insert(rule);
        }
        table
    }

    fn insert(&mut self, rule: &MappingRule) {
        self.kinds
            .entry(rule.element.to_ascii_lowercase())
            .or_insert_with(|| rule.kind());
        if let Some((container, kind)) = rule.container_kind() {
            self.kinds.entry(container).or_insert(kind);
        }
    }

    pub fn kind(&self, tag: &str) -> Option<&RuleKind> {
        self.kinds.get(tag)
    }

    /// All tags with a rule (sorted)
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.kinds.keys().map(String::as_str).collect();
        tags.sort();
        tags
    }
}

impl Default for InverseTable {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Rules used by the HTML → Markdown direction underneath any loaded rules.
pub fn fallback_rules() -> Vec<MappingRule> {
    vec![
        MappingRule::new("**", "strong").inline(),
        MappingRule::new("**", "b").inline(),
        MappingRule::new("*", "em").inline(),
        MappingRule::new("*", "i").inline(),
        MappingRule::new("`", "code").inline(),
        MappingRule::new("```", "pre")
            .closed_by("```")
            .with_language_hint(),
        MappingRule::new("# ", "h1"),
        MappingRule::new("## ", "h2"),
        MappingRule::new("### ", "h3"),
        MappingRule::new("#### ", "h4"),
        MappingRule::new("##### ", "h5"),
        MappingRule::new("###### ", "h6"),
        MappingRule::new("> ", "blockquote"),
        MappingRule::new("- ", "li").grouped("ul"),
        MappingRule::new("1. ", "li").grouped("ol"),
        MappingRule::new("[", "a").link(),
        MappingRule::new("![", "img").image(),
        MappingRule::new("---", "hr"),
        MappingRule::new("", "p"),
        MappingRule::new("  ", "br"),
    ]
}
