//! Mapping registry for rule loading and merging
//!
//! The registry owns two rule source locations, a built-in default table and a user
//! override table, and merges them keyed by Markdown token. User rules win on key
//! collision.
//!
//! Both locations are resolved through a [`RuleSource`]. [`FileSource`] reads JSON
//! files from disk, [`StaticSource`] serves JSON held in memory. A source that fails
//! to load contributes an empty sequence; the failure is logged, never returned.
//!
//! The shipped rule table is compiled into the crate and addressed as
//! `builtin:default`. [`StandardSource`], the registry's default source, serves
//! `builtin:` locations from memory and reads every other location from disk, so
//! the defaults load regardless of the working directory.
//!
//! # Examples
//!
//! ```ignore
//! let mut registry = MappingRegistry::new(RegistryConfig::default());
//! registry.set_sources(None, Some("mappings/user.json".to_string()));
//!
//! let rules = registry.load_rules().await;
//! ```

use crate::error::SourceError;
use crate::rules::MappingRule;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

const BUILTIN_DEFAULT_RULES: &str = include_str!("../mappings/default.json");

/// Location scheme for rule tables compiled into the crate.
pub const BUILTIN_SCHEME: &str = "builtin:";
/// Default location of the built-in rule table.
pub const DEFAULT_MAP_PATH: &str = "builtin:default";
/// Default location of the user override table.
pub const USER_MAP_PATH: &str = "mappings/user.json";

/// Locations of the two rule sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub default_map: String,
    pub user_map: String,
}

impl RegistryConfig {
    pub fn new(default_map: impl Into<String>, user_map: impl Into<String>) -> Self {
        Self {
            default_map: default_map.into(),
            user_map: user_map.into(),
        }
    }

    /// Returns the configuration with the given overrides applied.
    ///
    /// Absent fields keep their current value.
    pub fn apply(&self, paths: MappingPaths) -> Self {
        Self {
            default_map: paths.default_map.unwrap_or_else(|| self.default_map.clone()),
            user_map: paths.user_map.unwrap_or_else(|| self.user_map.clone()),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_PATH, USER_MAP_PATH)
    }
}

/// Partial override of the rule source locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingPaths {
    #[serde(default)]
    pub default_map: Option<String>,
    #[serde(default)]
    pub user_map: Option<String>,
}

/// An addressable resource resolving to an ordered sequence of rules.
#[async_trait]
pub trait RuleSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Vec<MappingRule>, SourceError>;
}

/// Reads rule tables from JSON files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

#[async_trait]
impl RuleSource for FileSource {
    async fn fetch(&self, location: &str) -> Result<Vec<MappingRule>, SourceError> {
        let text = tokio::fs::read_to_string(location)
            .await
            .map_err(|source| SourceError::Io {
                location: location.to_string(),
                source,
            })?;
        parse_rules(location, &text)
    }
}

/// Serves rule tables from JSON text held in memory, keyed by location.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a JSON document under a location.
    ///
    /// If a document with the same location already exists, it will be replaced.
    pub fn with(mut self, location: impl Into<String>, json: impl Into<String>) -> Self {
        self.documents.insert(location.into(), json.into());
        self
    }
}

#[async_trait]
impl RuleSource for StaticSource {
    async fn fetch(&self, location: &str) -> Result<Vec<MappingRule>, SourceError> {
        let text = self
            .documents
            .get(location)
            .ok_or_else(|| SourceError::NotFound {
                location: location.to_string(),
            })?;
        parse_rules(location, text)
    }
}

/// Serves `builtin:` locations from the compiled-in tables and reads all other
/// locations from disk.
#[derive(Debug, Clone)]
pub struct StandardSource {
    builtin: StaticSource,
    files: FileSource,
}

impl StandardSource {
    pub fn new() -> Self {
        Self {
            builtin: StaticSource::new().with(DEFAULT_MAP_PATH, BUILTIN_DEFAULT_RULES),
            files: FileSource,
        }
    }
}

impl Default for StandardSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RuleSource for StandardSource {
    async fn fetch(&self, location: &str) -> Result<Vec<MappingRule>, SourceError> {
        if location.starts_with(BUILTIN_SCHEME) {
            self.builtin.fetch(location).await
        } else {
            self.files.fetch(location).await
        }
    }
}

/// Parse a JSON rule table.
///
/// The top level must be an array. Entries that are not valid rules are skipped
/// with a warning rather than discarding the whole table.
pub fn parse_rules(location: &str, text: &str) -> Result<Vec<MappingRule>, SourceError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| SourceError::Json {
            location: location.to_string(),
            source,
        })?;
    let serde_json::Value::Array(entries) = value else {
        return Err(SourceError::NotASequence {
            location: location.to_string(),
        });
    };

    let mut rules = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<MappingRule>(entry) {
            Ok(rule) => rules.push(rule),
            Err(error) => warn!(location, index, %error, "skipping malformed mapping rule"),
        }
    }
    Ok(rules)
}

/// Merge two rule sequences keyed by token; `user` wins on collision.
///
/// The result keeps a fixed order: default-sequence order, with a user rule taking
/// the place of the default it overrides, followed by user rules for new tokens in
/// their own order. A repeated token within one sequence replaces the earlier
/// entry in place.
pub fn merge_rules(defaults: Vec<MappingRule>, user: Vec<MappingRule>) -> Vec<MappingRule> {
    let mut merged: Vec<MappingRule> = Vec::with_capacity(defaults.len() + user.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for rule in defaults.into_iter().chain(user) {
        match positions.get(&rule.token) {
            Some(&index) => merged[index] = rule,
            None => {
                positions.insert(rule.token.clone(), merged.len());
                merged.push(rule);
            }
        }
    }

    merged
}

/// Loads and merges the default and user rule tables.
#[derive(Clone)]
pub struct MappingRegistry {
    config: RegistryConfig,
    source: Arc<dyn RuleSource>,
}

impl MappingRegistry {
    /// Create a registry reading the built-in table and JSON files from the
    /// configured locations.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_source(config, StandardSource::new())
    }

    /// Create a registry resolving locations through a custom source.
    pub fn with_source<S: RuleSource + 'static>(config: RegistryConfig, source: S) -> Self {
        Self {
            config,
            source: Arc::new(source),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Reconfigure the source locations for subsequent loads.
    ///
    /// `None` leaves the corresponding location unchanged. Returns the new
    /// effective configuration.
    pub fn set_sources(
        &mut self,
        default_map: Option<String>,
        user_map: Option<String>,
    ) -> RegistryConfig {
        self.configure(MappingPaths {
            default_map,
            user_map,
        })
    }

    /// Apply a [`MappingPaths`] override, returning the new effective configuration.
    pub fn configure(&mut self, paths: MappingPaths) -> RegistryConfig {
        self.config = self.config.apply(paths);
        self.config.clone()
    }

    /// Load both sources concurrently and merge them.
    ///
    /// Never fails: a source that cannot be loaded contributes no rules.
    pub async fn load_rules(&self) -> Vec<MappingRule> {
        let (defaults, user) = tokio::join!(
            self.load_source(&self.config.default_map),
            self.load_source(&self.config.user_map),
        );
        let merged = merge_rules(defaults, user);
        debug!(rules = merged.len(), "merged mapping rules");
        merged
    }

    async fn load_source(&self, location: &str) -> Vec<MappingRule> {
        match self.source.fetch(location).await {
            Ok(rules) => rules,
            Err(error) => {
                warn!(location = error.location(), %error, "mapping source unavailable");
                Vec::new()
            }
        }
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl std::fmt::Debug for MappingRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingRegistry")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
