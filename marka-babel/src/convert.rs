//! Conversion entry points
//!
//! [`Converter`] ties the mapping registry to both converters. Every top-level call
//! loads the rule tables afresh, so configuration changes made between calls take
//! effect on the next one; the merged table is fixed for the duration of a call.

use crate::formats::html::{self, markdown_to_markup};
use crate::formats::markdown::{markup_to_markdown, InverseTable};
use crate::ir::from_html::parse_html;
use crate::ir::nodes::MarkupNode;
use crate::registry::{MappingRegistry, RegistryConfig};
use crate::rules::MappingRule;
use crate::stream::stream_lines;
use futures::Stream;
use std::time::Duration;
use tracing::warn;

/// Markdown ↔ HTML converter backed by a [`MappingRegistry`].
#[derive(Debug, Clone, Default)]
pub struct Converter {
    registry: MappingRegistry,
}

impl Converter {
    pub fn new(registry: MappingRegistry) -> Self {
        Self { registry }
    }

    /// Converter reading mapping files from the given configuration.
    pub fn from_config(config: RegistryConfig) -> Self {
        Self::new(MappingRegistry::new(config))
    }

    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut MappingRegistry {
        &mut self.registry
    }

    /// Rules for the Markdown → HTML direction, falling back to the built-in table.
    pub async fn forward_rules(&self) -> Vec<MappingRule> {
        let rules = self.registry.load_rules().await;
        if rules.is_empty() {
            warn!("no mapping rules loaded, using fallback mappings");
            return html::fallback_rules();
        }
        rules
    }

    /// Rules for the HTML → Markdown direction, layered over the built-in table.
    pub async fn inverse_table(&self) -> InverseTable {
        let rules = self.registry.load_rules().await;
        if rules.is_empty() {
            warn!("no mapping rules loaded, using fallback inverse mappings");
        }
        InverseTable::from_rules(&rules)
    }

    /// Convert Markdown text to HTML.
    pub async fn convert(&self, markdown: &str) -> String {
        let rules = self.forward_rules().await;
        markdown_to_markup(markdown, &rules)
    }

    /// Convert Markdown text to HTML, revealed one line every `delay_ms`.
    pub async fn stream(&self, markdown: &str, delay_ms: u64) -> impl Stream<Item = String> {
        let markup = self.convert(markdown).await;
        stream_lines(markup, Duration::from_millis(delay_ms))
    }

    /// Convert a markup tree to Markdown.
    pub async fn to_markdown(&self, tree: &MarkupNode) -> String {
        let table = self.inverse_table().await;
        markup_to_markdown(tree, &table)
    }

    /// Parse HTML text and convert it to Markdown.
    pub async fn html_to_markdown(&self, markup: &str) -> String {
        self.to_markdown(&parse_html(markup)).await
    }
}
