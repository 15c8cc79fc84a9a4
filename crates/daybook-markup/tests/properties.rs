//! Property tests: idempotence and escaping round-trips.

use daybook_markup::{MarkupNode, escape_attribute, escape_text, parse};
use daybook_model::TextFragment;
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 <>&;#/=\"'éж🙂\n]{0,12}").expect("valid regex")
}

/// Well-formed markup built from escaped leaves.
fn markup() -> impl Strategy<Value = String> {
    let leaf = text().prop_map(|t| escape_text(&t));
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(|parts| parts.concat()),
            (
                prop::sample::select(vec![
                    "b", "strong", "i", "em", "u", "ins", "s", "del", "tg-spoiler",
                ]),
                inner.clone(),
            )
                .prop_map(|(tag, body)| format!("<{tag}>{body}</{tag}>")),
            (prop::sample::select(vec!["code", "pre"]), text())
                .prop_map(|(tag, body)| format!("<{tag}>{}</{tag}>", escape_text(&body))),
            (text(), inner).prop_map(|(slug, body)| format!(
                "<a href=\"https://example.org/{}\">{body}</a>",
                escape_attribute(&slug)
            )),
        ]
    })
}

fn reparse_matches(source: &str) -> Result<(), TestCaseError> {
    let Ok(first) = parse(&TextFragment::from_text("prop", source)) else {
        return Ok(());
    };
    let rendered = first.render();
    let second = parse(&TextFragment::from_text("prop", rendered.as_str()))
        .map_err(|err| TestCaseError::fail(format!("rendered text rejected: {err}")))?;
    prop_assert_eq!(first.nodes(), second.nodes());
    prop_assert_eq!(second.render(), rendered);
    Ok(())
}

proptest! {
    #[test]
    fn well_formed_markup_validates(source in markup()) {
        let parsed = parse(&TextFragment::from_text("prop", &source));
        prop_assert!(parsed.is_ok(), "rejected {source:?}: {parsed:?}");
    }

    #[test]
    fn revalidating_well_formed_markup_is_a_no_op(source in markup()) {
        reparse_matches(&source)?;
    }

    #[test]
    fn revalidating_arbitrary_text_is_a_no_op(source in "(<b>|</b>|<i>|</i>|<pre>|</pre>|<xyz>|&amp;|&lt;|[a-z &<>;])*") {
        reparse_matches(&source)?;
    }

    #[test]
    fn escaped_text_parses_to_single_text_node(original in "\\PC*") {
        let escaped = escape_text(&original);
        let document = parse(&TextFragment::from_text("prop", &escaped))
            .map_err(|err| TestCaseError::fail(format!("escaped text rejected: {err}")))?;
        if original.is_empty() {
            prop_assert!(document.nodes().is_empty());
        } else {
            prop_assert_eq!(document.nodes(), &[MarkupNode::text(original.clone())][..]);
        }
    }
}
