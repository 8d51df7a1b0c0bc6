//! Rendering tests for the forward direction

use crate::common::{fallback_converter, file_converter, read_fixture};
use insta::assert_snapshot;
use marka_babel::formats::html::{fallback_rules, markdown_to_markup};
use marka_babel::{Converter, RegistryConfig};

#[tokio::test]
async fn test_kitchensink_with_fallback_rules() {
    let html = fallback_converter()
        .convert(&read_fixture("kitchensink.md"))
        .await;

    assert_snapshot!(html, @r#"
    <h1>Kitchen Sink</h1>
    <p>Intro with <strong>bold</strong>, <em>italic</em> and <code>code</code>.</p>
    <blockquote>A quote</blockquote>
    <ul>
    <li>first</li>
    <li>second</li>
    </ul>
    <ol>
    <li>one</li>
    <li>two</li>
    <pre><code class="language-rust">fn main() {}</code></pre>
    </ol>
    <p><img src="logo.png" alt="logo"> and <a href="https://example.com">home</a></p>
    <hr></hr>
    <p></p>
    "#);
}

#[tokio::test]
async fn test_fence_renders_single_code_element() {
    let html = fallback_converter().convert("```js\nlet x=1;\n```").await;
    assert_eq!(html, r#"<pre><code class="language-js">let x=1;</code></pre>"#);
    assert!(!html.contains("<p>"));
}

#[tokio::test]
async fn test_list_then_paragraph() {
    let html = fallback_converter().convert("- a\n- b\n\nc").await;
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.ends_with("</ul>\n<p></p>\n<p>c</p>"));
}

#[tokio::test]
async fn test_image_never_becomes_link() {
    let html = fallback_converter().convert("![alt](img.png)").await;
    assert!(html.contains("<img"));
    assert!(!html.contains("<a "));
}

#[tokio::test]
async fn test_user_rules_override_defaults() {
    let html = file_converter("user.json").convert("# Title\n!! note").await;
    assert_eq!(html, "<h2>Title</h2>\n<aside>note</aside>");
}

#[tokio::test]
async fn test_user_rule_joins_existing_group() {
    let html = file_converter("user.json").convert("- a\n+ b").await;
    assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
}

#[tokio::test]
async fn test_broken_user_source_keeps_defaults() {
    let html = file_converter("broken.json").convert("#### Deep").await;
    assert_eq!(html, "<h4>Deep</h4>");
}

#[tokio::test]
async fn test_fallback_table_has_no_h4() {
    let html = fallback_converter().convert("#### Deep").await;
    assert_eq!(html, "<p>#### Deep</p>");
}

#[tokio::test]
async fn test_conversion_is_deterministic() {
    let converter = file_converter("user.json");
    let source = read_fixture("kitchensink.md");
    let first = converter.convert(&source).await;
    let second = converter.convert(&source).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_configuration_change_applies_to_next_call() {
    let mut converter = Converter::from_config(RegistryConfig::new(
        "/nonexistent/default.json",
        "/nonexistent/user.json",
    ));
    assert_eq!(converter.convert("#### x").await, "<p>#### x</p>");

    converter
        .registry_mut()
        .set_sources(Some(crate::common::shipped_default_map()), None);
    assert_eq!(converter.convert("#### x").await, "<h4>x</h4>");
}

#[test]
fn test_sync_core_matches_async_entry_point() {
    let html = markdown_to_markup("> q\n- i", &fallback_rules());
    assert_eq!(
        html,
        "<blockquote>q</blockquote>\n<ul>\n<li>i</li>\n</ul>"
    );
}
