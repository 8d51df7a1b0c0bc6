//! Mapping-driven Markdown ↔ HTML conversion
//!
//!     This crate converts a small, extensible Markdown dialect to HTML and walks HTML
//!     element trees back into that dialect. The dialect is defined by a rule table
//!     rather than by a grammar: each rule maps a Markdown line prefix to an HTML tag.
//!
//!     This is a pure lib, that is, it powers the marka cli and editor integrations but
//!     is shell agnostic: no code here prints, reads env vars or installs a logger.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # Rule source errors
//!     ├── rules.rs                # MappingRule records and the RuleKind dispatch set
//!     ├── registry.rs             # Loading and merging default + user rule tables
//!     ├── formats
//!     │   ├── html                # Markdown → HTML (line state machine + inline pass)
//!     │   └── markdown            # HTML tree → Markdown (recursive walk)
//!     ├── ir                      # Markup tree + html5ever adapter
//!     ├── stream.rs               # Line-paced output
//!     └── convert.rs              # Async entry points tying it together
//!
//! Core Algorithms
//!
//!     The forward direction is the only stateful part: it captures fenced code,
//!     groups consecutive list lines into one container and closes containers when a
//!     different block starts. See ./formats/html/serializer.rs.
//!
//!     The inverse direction is a depth-first walk. Each tag is looked up in an
//!     InverseTable and rendered according to its RuleKind. See
//!     ./formats/markdown/serializer.rs.
//!
//!     Both directions share the registry's merged table but keep their own
//!     fallback tables, which differ on purpose: the forward fallback has no link
//!     or image rules, since those are handled by the inline pass.
//!
//! Round Tripping
//!
//!     Markdown → HTML → Markdown is lossy: blank lines become empty paragraphs,
//!     paragraphs gain blank-line separation, trailing whitespace is dropped.
//!     Conversion is deterministic: the same input and rule table always produce
//!     the same output.
//!
//! Library Choices
//!
//!     - `html5ever` + `markup5ever_rcdom` for parsing HTML text into a tree
//!     - `regex` for inline span substitution
//!     - `tokio` for concurrent rule source loading and paced streaming
//!     - `serde_json` for rule sources
//!     - `tracing` for warnings when sources are unavailable
//!
pub mod convert;
pub mod error;
pub mod formats;
pub mod ir;
pub mod registry;
pub mod rules;
pub mod stream;

pub use convert::Converter;
pub use error::SourceError;
pub use ir::nodes::{Element, MarkupNode};
pub use registry::{MappingPaths, MappingRegistry, RegistryConfig};
pub use rules::{MappingRule, RuleKind};
