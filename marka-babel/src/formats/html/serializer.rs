//! HTML serialization (Markdown → HTML)
//!
//! Line-oriented renderer driven by the mapping table.
//! Pipeline per line: fence detection → verbatim capture → first-match rule → paragraph.
//!
//! Every emitted element and every group open/close tag sits on its own output
//! line, and the final string is trimmed.

use super::inline::substitute_inline;
use crate::rules::MappingRule;

const DEFAULT_FENCE_TOKEN: &str = "```";
const DEFAULT_FENCE_ELEMENT: &str = "pre";

/// Mutable state of one conversion call.
#[derive(Debug, Default)]
struct ConversionState {
    inside_code_block: bool,
    code_language: String,
    code_buffer: Vec<String>,
    active_group_tag: Option<String>,
    output: String,
}

impl ConversionState {
    fn emit(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn close_group(&mut self) {
        if let Some(tag) = self.active_group_tag.take() {
            self.emit(&format!("</{tag}>"));
        }
    }

    /// Make `tag` the open group, closing a different one first.
    fn enter_group(&mut self, tag: &str) {
        if self.active_group_tag.as_deref() == Some(tag) {
            return;
        }
        self.close_group();
        self.emit(&format!("<{tag}>"));
        self.active_group_tag = Some(tag.to_string());
    }

    fn open_fence(&mut self, language: String) {
        self.inside_code_block = true;
        self.code_language = language;
    }

    fn close_fence(&mut self, element: &str) {
        self.inside_code_block = false;
        let language = std::mem::take(&mut self.code_language);
        let code = std::mem::take(&mut self.code_buffer).join("\n");
        let class = if language.is_empty() {
            String::new()
        } else {
            format!(" class=\"language-{language}\"")
        };
        self.emit(&format!("<{element}><code{class}>{code}</code></{element}>"));
    }
}

/// The delimiter that toggles verbatim capture.
struct Fence<'a> {
    token: &'a str,
    element: &'a str,
    captures_language: bool,
}

impl<'a> Fence<'a> {
    fn from_rules(rules: &'a [MappingRule]) -> Self {
        match rules.iter().find(|rule| rule.is_fence()) {
            Some(rule) => Fence {
                token: &rule.token,
                element: &rule.element,
                captures_language: rule.supports_language_hint,
            },
            None => Fence {
                token: DEFAULT_FENCE_TOKEN,
                element: DEFAULT_FENCE_ELEMENT,
                captures_language: true,
            },
        }
    }

    fn language_hint(&self, line: &str) -> String {
        if !self.captures_language {
            return String::new();
        }
        line.strip_prefix(self.token)
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

/// Convert Markdown text to HTML using the given rules, tried in order.
///
/// Lines inside an unterminated fence are never emitted.
pub fn markdown_to_markup(markdown: &str, rules: &[MappingRule]) -> String {
    let fence = Fence::from_rules(rules);
    let block_rules: Vec<&MappingRule> = rules.iter().filter(|rule| rule.is_block()).collect();
    let mut state = ConversionState::default();

    for line in markdown.split('\n') {
        let trimmed = line.trim_end();

        if !fence.token.is_empty() && trimmed.starts_with(fence.token) {
            if state.inside_code_block {
                state.close_fence(fence.element);
            } else {
                state.open_fence(fence.language_hint(trimmed));
            }
            continue;
        }

        if state.inside_code_block {
            state.code_buffer.push(trimmed.to_string());
            continue;
        }

        match block_rules
            .iter()
            .find(|rule| trimmed.starts_with(rule.token.as_str()))
        {
            Some(rule) => {
                let content = substitute_inline(&trimmed[rule.token.len()..]);
                match &rule.group_tag {
                    Some(group) => state.enter_group(group),
                    None => state.close_group(),
                }
                state.emit(&format!("<{0}>{content}</{0}>", rule.element));
            }
            None => {
                state.close_group();
                state.emit(&format!("<p>{}</p>", substitute_inline(trimmed)));
            }
        }
    }

    state.close_group();
    state.output.trim().to_string()
}
