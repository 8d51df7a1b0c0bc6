//! HTML → Markdown tests
//!
//! Trees are built by hand or parsed from HTML text with the html5ever adapter.

mod export;
