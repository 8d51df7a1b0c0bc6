//! Markdown → HTML tests
//!
//! Drive the forward converter through the async entry points, with both the
//! fallback table and file-backed rule sources.

mod render;
mod stream;
