//! Export tests for the inverse direction (HTML → Markdown)

use crate::common::{fallback_converter, file_converter};
use insta::assert_snapshot;
use marka_babel::formats::markdown::{markup_to_markdown, InverseTable};
use marka_babel::ir::from_html::parse_html;
use marka_babel::{Element, MarkupNode};

fn html_to_md(html: &str) -> String {
    markup_to_markdown(&parse_html(html), &InverseTable::fallback())
}

#[tokio::test]
async fn test_strong_tree() {
    let tree = MarkupNode::element("strong", vec![MarkupNode::text("bold")]);
    assert_eq!(fallback_converter().to_markdown(&tree).await, "**bold**");
}

#[tokio::test]
async fn test_blank_producing_siblings_collapse() {
    let tree = MarkupNode::element(
        "div",
        vec![
            MarkupNode::element("p", vec![MarkupNode::text("top")]),
            MarkupNode::element("hr", vec![]),
            MarkupNode::element("p", vec![]),
            MarkupNode::element("p", vec![]),
            MarkupNode::element("p", vec![MarkupNode::text("bottom")]),
        ],
    );
    let md = fallback_converter().to_markdown(&tree).await;
    assert_eq!(md, "top\n\n---\n\nbottom");
}

#[test]
fn test_document_export() {
    let md = html_to_md(
        r#"<h1>Guide</h1>
<p>Read <a href="https://example.com">the docs</a> first.</p>
<blockquote>Be careful</blockquote>
<ul>
<li>one</li>
<li>two</li>
</ul>
<ol>
<li>alpha</li>
<li>beta</li>
</ol>
<pre><code class="language-python">print("hi")</code></pre>
<p><img src="cat.png" alt="cat"></p>"#,
    );

    assert_snapshot!(md, @r#"
    # Guide

    Read [the docs](https://example.com) first.

    > Be careful

    - one
    - two

    1. alpha
    2. beta

    ```python
    print("hi")
    ```

    ![cat](cat.png)
    "#);
}

#[test]
fn test_style_and_script_content_never_reaches_output() {
    let md = html_to_md(
        "<style>.x { color: red }</style><p>kept</p><script>var secret = 1;</script>",
    );
    assert_eq!(md, "kept");
}

#[test]
fn test_unknown_wrappers_are_transparent() {
    let md = html_to_md("<div><section><span>inner <em>text</em></span></section></div>");
    assert_eq!(md, "inner *text*");
}

#[test]
fn test_fence_without_code_child() {
    let pre = Element::new("pre").with_child(MarkupNode::text("raw"));
    let md = markup_to_markdown(&pre.into(), &InverseTable::fallback());
    assert_eq!(md, "```\nraw\n```");
}

#[test]
fn test_link_without_href() {
    assert_eq!(html_to_md("<a>anchor</a>"), "[anchor]()");
}

#[tokio::test]
async fn test_user_inline_rule_in_inverse_direction() {
    let md = file_converter("user.json")
        .html_to_markdown("<p>old <del>price</del></p>")
        .await;
    assert_eq!(md, "old ~~price~~");
}

#[tokio::test]
async fn test_fallback_del_passes_through() {
    let md = fallback_converter()
        .html_to_markdown("<p>old <del>price</del></p>")
        .await;
    assert_eq!(md, "old price");
}
