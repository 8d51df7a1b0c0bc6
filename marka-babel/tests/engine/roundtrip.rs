//! Properties spanning both directions

use marka_babel::formats::html::{fallback_rules, markdown_to_markup};
use marka_babel::formats::markdown::{markup_to_markdown, InverseTable};
use marka_babel::ir::from_html::parse_html;
use proptest::prelude::*;

fn markdown_line() -> impl Strategy<Value = String> {
    let prefix = prop::sample::select(vec![
        "", "# ", "## ", "### ", "> ", "- ", "* ", "1. ", "---", "```", "```js",
    ]);
    let words = prop::collection::vec("[a-z]{1,6}", 0..4);
    let decoration = prop::sample::select(vec!["", "**", "*", "`"]);
    (prefix, words, decoration).prop_map(|(prefix, words, decoration)| {
        let text = words.join(" ");
        if text.is_empty() || decoration.is_empty() {
            format!("{prefix}{text}")
        } else {
            format!("{prefix}{decoration}{text}{decoration}")
        }
    })
}

fn markdown_document() -> impl Strategy<Value = String> {
    prop::collection::vec(markdown_line(), 0..16).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn forward_conversion_is_deterministic(md in markdown_document()) {
        let rules = fallback_rules();
        prop_assert_eq!(markdown_to_markup(&md, &rules), markdown_to_markup(&md, &rules));
    }

    #[test]
    fn forward_conversion_balances_groups(md in markdown_document()) {
        let html = markdown_to_markup(&md, &fallback_rules());
        prop_assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
        prop_assert_eq!(html.matches("<ol>").count(), html.matches("</ol>").count());
        prop_assert_eq!(html.trim(), html.as_str());
    }

    #[test]
    fn inverse_output_is_trimmed_and_collapsed(md in markdown_document()) {
        let html = markdown_to_markup(&md, &fallback_rules());
        let back = markup_to_markdown(&parse_html(&html), &InverseTable::fallback());
        prop_assert!(!back.contains("\n\n\n"));
        prop_assert_eq!(back.trim(), back.as_str());
    }
}

#[test]
fn test_simple_document_survives_round_trip() {
    let md = "# Title\n\n**bold** and *it*\n\n- a\n- b";
    let html = markdown_to_markup(md, &fallback_rules());
    let back = markup_to_markdown(&parse_html(&html), &InverseTable::fallback());
    assert_eq!(back, "# Title\n\n**bold** and *it*\n\n- a\n- b");
}
