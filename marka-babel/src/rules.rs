//! Mapping rules
//!
//! A [`MappingRule`] pairs a Markdown token with a markup tag. The same record type
//! serves both directions: the forward converter reads `token`, `element`,
//! `group_tag` and `supports_language_hint`, while the inverse converter
//! additionally understands the closing/inline tokens and the link/image flags.
//!
//! # Rule source format
//!
//! Rule sources are JSON arrays of objects:
//!
//! ```json
//! [
//!   { "mdStart": "# ", "htmlElement": "h1" },
//!   { "mdStart": "- ", "htmlElement": "li", "wrapWith": "ul" },
//!   { "mdStart": "```", "htmlElement": "pre", "wrapWith": "codeblock", "langSupport": true },
//!   { "mdStart": "**", "htmlElement": "strong", "inlineToken": "**" }
//! ]
//! ```
//!
//! Inverse-direction behavior is not stored in the table as free-form strings but
//! reduced to a closed set of [`RuleKind`]s, see [`MappingRule::kind`].

use serde::{Deserialize, Serialize};

/// One conversion rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRule {
    /// Literal Markdown prefix that triggers the rule. Unique as a registry key.
    #[serde(rename = "mdStart")]
    pub token: String,
    /// Target markup tag name.
    #[serde(rename = "htmlElement")]
    pub element: String,
    /// Container tag wrapping consecutive lines matched by rules with the same group.
    #[serde(rename = "wrapWith", default, skip_serializing_if = "Option::is_none")]
    pub group_tag: Option<String>,
    /// Fence rules only: capture the token after the opening delimiter as a language label.
    #[serde(rename = "langSupport", default, skip_serializing_if = "is_false")]
    pub supports_language_hint: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_token: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_link: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_image: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl MappingRule {
    /// A block rule: `token` at line start maps to `element`.
    pub fn new(token: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            element: element.into(),
            group_tag: None,
            supports_language_hint: false,
            closing_token: None,
            inline_token: None,
            is_link: false,
            is_image: false,
        }
    }

    pub fn grouped(mut self, group_tag: impl Into<String>) -> Self {
        self.group_tag = Some(group_tag.into());
        self
    }

    pub fn with_language_hint(mut self) -> Self {
        self.supports_language_hint = true;
        self
    }

    pub fn closed_by(mut self, closing_token: impl Into<String>) -> Self {
        self.closing_token = Some(closing_token.into());
        self
    }

    /// Marks the rule as wrap-both-sides, using its own token on both ends.
    pub fn inline(mut self) -> Self {
        self.inline_token = Some(self.token.clone());
        self
    }

    pub fn link(mut self) -> Self {
        self.is_link = true;
        self
    }

    pub fn image(mut self) -> Self {
        self.is_image = true;
        self
    }

    /// Whether this rule delimits a verbatim code region.
    pub fn is_fence(&self) -> bool {
        self.supports_language_hint || self.closing_token.is_some()
    }

    /// Whether the forward converter matches this rule against line starts.
    ///
    /// Fences are detected separately; inline, link and image rules only
    /// describe the inverse direction.
    pub fn is_block(&self) -> bool {
        !self.is_fence() && self.inline_token.is_none() && !self.is_link && !self.is_image
    }

    /// Classifies the rule for the inverse converter.
    ///
    /// Structural flags take precedence over token shape: link and image rules
    /// need attribute extraction, inline rules wrap, fences need open/close
    /// tokens. A grouped rule is a list item; its container is described
    /// separately by [`MappingRule::container_kind`].
    pub fn kind(&self) -> RuleKind {
        if self.is_image {
            RuleKind::Image
        } else if self.is_link {
            RuleKind::Link
        } else if let Some(token) = &self.inline_token {
            RuleKind::InlineWrap {
                token: token.clone(),
            }
        } else if self.is_fence() {
            RuleKind::Fence {
                open: self.token.clone(),
                close: self
                    .closing_token
                    .clone()
                    .unwrap_or_else(|| self.token.clone()),
            }
        } else if self.group_tag.is_some() {
            RuleKind::ListItem
        } else if self.element.eq_ignore_ascii_case("br") {
            RuleKind::LineBreak
        } else {
            RuleKind::BlockPrefix {
                token: self.token.clone(),
                every_line: self.element.eq_ignore_ascii_case("blockquote"),
            }
        }
    }

    /// The container tag and its kind, for grouped non-fence rules.
    pub fn container_kind(&self) -> Option<(String, RuleKind)> {
        if self.is_fence() {
            return None;
        }
        let group = self.group_tag.as_ref()?;
        Some((
            group.to_ascii_lowercase(),
            RuleKind::ListContainer {
                marker: ListMarker::from_token(&self.token),
            },
        ))
    }
}

/// Rendering behavior of a tag in the inverse direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Content prefixed by a token on its own logical line (headings, paragraphs, quotes).
    BlockPrefix { token: String, every_line: bool },
    /// Content surrounded by the same token on both sides.
    InlineWrap { token: String },
    /// Verbatim region between an opening and a closing token.
    Fence { open: String, close: String },
    Link,
    Image,
    /// A single line inside a list container; the container adds the marker.
    ListItem,
    /// A list; re-prefixes every item line with a marker.
    ListContainer { marker: ListMarker },
    LineBreak,
}

/// How a list container marks its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    /// The same bullet token before every item (e.g. `"- "`).
    Bullet(String),
    /// An incrementing ordinal: `1. `, `2. `, ...
    Ordinal,
}

impl ListMarker {
    /// `"1. "` style tokens are ordinal, everything else is a bullet.
    pub fn from_token(token: &str) -> Self {
        let trimmed = token.trim_end();
        match trimmed.strip_suffix('.') {
            Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
                ListMarker::Ordinal
            }
            _ => ListMarker::Bullet(token.to_string()),
        }
    }

    /// Marker for the item at `index` (zero-based).
    pub fn marker(&self, index: usize) -> String {
        match self {
            ListMarker::Bullet(token) => token.clone(),
            ListMarker::Ordinal => format!("{}. ", index + 1),
        }
    }
}
