//! Shared configuration loader for the marka toolchain.
//!
//! `defaults/marka.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MarkaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use marka_babel::{MappingPaths, RegistryConfig};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/marka.default.toml");

/// Top-level configuration consumed by marka applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkaConfig {
    pub mappings: MappingsConfig,
    pub stream: StreamConfig,
    pub logging: LoggingConfig,
}

/// Locations of the mapping rule sources.
#[derive(Debug, Clone, Deserialize)]
pub struct MappingsConfig {
    pub default_map: String,
    pub user_map: String,
}

impl From<MappingsConfig> for RegistryConfig {
    fn from(config: MappingsConfig) -> Self {
        RegistryConfig::new(config.default_map, config.user_map)
    }
}

impl From<&MappingsConfig> for RegistryConfig {
    fn from(config: &MappingsConfig) -> Self {
        RegistryConfig::new(config.default_map.clone(), config.user_map.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Layers configuration files and per-invocation overrides over the embedded
/// defaults. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Override the mapping source locations that are set in `paths`.
    ///
    /// Unset fields keep whatever the earlier layers configured.
    pub fn with_mapping_overrides(mut self, paths: &MappingPaths) -> Result<Self, ConfigError> {
        if let Some(default_map) = &paths.default_map {
            self = self.set_override("mappings.default_map", default_map.clone())?;
        }
        if let Some(user_map) = &paths.user_map {
            self = self.set_override("mappings.user_map", user_map.clone())?;
        }
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MarkaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkaConfig, ConfigError> {
    Loader::new().build()
}
