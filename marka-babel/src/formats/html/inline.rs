//! Inline span substitution
//!
//! Single-pass, non-recursive regex replacement of span-level Markdown inside one
//! line of text. Each pattern is non-greedy and replaces globally. The order is
//! fixed: images must be resolved before links, since `![alt](src)` contains a
//! link-shaped `[alt](src)`.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.+?)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

/// Replace bold, italic, inline code, image and link spans with markup.
pub fn substitute_inline(text: &str) -> String {
    let text = BOLD.replace_all(text, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");
    let text = CODE.replace_all(&text, "<code>$1</code>");
    let text = IMAGE.replace_all(&text, r#"<img src="$2" alt="$1">"#);
    LINK.replace_all(&text, r#"<a href="$2">$1</a>"#).into_owned()
}
