//! Error types for rule source operations
//!
//! Conversions themselves are total: every input produces some output. The only
//! fallible step is fetching a rule source, and the registry masks those failures
//! by logging them and substituting an empty rule sequence.

use thiserror::Error;

/// Errors that can occur while fetching a mapping rule source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The resource could not be read
    #[error("failed to load mappings from {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
    /// The resource is not valid JSON
    #[error("invalid mapping JSON in {location}: {source}")]
    Json {
        location: String,
        #[source]
        source: serde_json::Error,
    },
    /// The resource parsed, but its top level is not an array of rules
    #[error("mappings in {location} are not a sequence of rules")]
    NotASequence { location: String },
    /// No resource is registered under the requested location
    #[error("no mapping resource at {location}")]
    NotFound { location: String },
}

impl SourceError {
    /// The location the failing fetch was addressed to.
    pub fn location(&self) -> &str {
        match self {
            SourceError::Io { location, .. }
            | SourceError::Json { location, .. }
            | SourceError::NotASequence { location }
            | SourceError::NotFound { location } => location,
        }
    }
}
