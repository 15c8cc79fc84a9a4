//! Behavioural tests for fragment validation.

use daybook_markup::{
    AllowedTag, MarkupErrorKind, MarkupNode, escape_text, parse, validate, validate_str,
};
use daybook_model::{Position, TextFragment};

fn fragment(text: &str) -> TextFragment {
    TextFragment::from_text("1_day/text.txt", text)
}

#[test]
fn crossed_nesting_is_rejected() {
    let err = validate(&fragment("<b>bold <i>both</b> broken</i>")).expect_err("crossed tags");
    assert_eq!(err.origin.as_str(), "1_day/text.txt");
    assert_eq!(
        err.kind,
        MarkupErrorKind::MismatchedTag {
            found: "b".to_string(),
            expected: Some("i".to_string()),
            position: Position::new(15, 1, 16),
        }
    );
}

#[test]
fn unknown_tags_degrade_to_text() {
    let rendered = validate(&fragment("<xyz>hi</xyz>")).expect("unknown tags are not errors");
    assert_eq!(rendered.as_str(), "&lt;xyz&gt;hi&lt;/xyz&gt;");
}

#[test]
fn link_scheme_is_enforced() {
    let err = validate(&fragment("<a href=\"ftp://x\">x</a>")).expect_err("ftp link");
    assert!(matches!(
        err.kind,
        MarkupErrorKind::LinkScheme { ref url, position }
            if url == "ftp://x" && position.offset == 0
    ));

    let rendered = validate(&fragment("<a href=\"https://x\">x</a>")).expect("https link");
    assert_eq!(rendered.as_str(), "<a href=\"https://x\">x</a>");
}

#[test]
fn code_block_rejects_styling() {
    let err = validate(&fragment("<pre><b>x</b></pre>")).expect_err("styled code");
    assert_eq!(
        err.kind,
        MarkupErrorKind::NestedCodeStyle {
            tag: "b".to_string(),
            container: "pre".to_string(),
            position: Position::new(5, 1, 6),
        }
    );
}

#[test]
fn code_content_is_escaped_verbatim() {
    let rendered = validate(&fragment("<code>if a < b && c > d { <xyz> }</code>")).expect("valid");
    assert_eq!(
        rendered.as_str(),
        "<code>if a &lt; b &amp;&amp; c &gt; d { &lt;xyz&gt; }</code>"
    );
}

#[test]
fn aliases_are_canonicalized() {
    let rendered = validate(&fragment(
        "<strong>a</strong><em>b</em><ins>c</ins><strike>d</strike><del>e</del>\
         <span class=\"tg-spoiler\">f</span><tg-spoiler>g</tg-spoiler>",
    ))
    .expect("valid");
    assert_eq!(
        rendered.as_str(),
        "<b>a</b><i>b</i><u>c</u><s>d</s><s>e</s><tg-spoiler>f</tg-spoiler><tg-spoiler>g</tg-spoiler>"
    );
}

#[test]
fn stray_span_close_is_literal_text() {
    let rendered = validate_str("x", "see x</span> here").expect("unknown tags are not errors");
    assert_eq!(rendered.as_str(), "see x&lt;/span&gt; here");

    let rendered = validate_str("x", "<b>a</span></b>").expect("valid");
    assert_eq!(rendered.as_str(), "<b>a&lt;/span&gt;</b>");
}

#[test]
fn plain_span_is_literal_text() {
    let rendered = validate(&fragment("<span>x</span>")).expect("valid");
    assert_eq!(rendered.as_str(), "&lt;span&gt;x&lt;/span&gt;");
}

#[test]
fn emoji_and_cyrillic_pass_through() {
    let rendered = validate(&fragment("🎉 <b>День 1</b> · ✨")).expect("valid");
    assert_eq!(rendered.as_str(), "🎉 <b>День 1</b> · ✨");
}

#[test]
fn error_positions_count_scalars_not_bytes() {
    let err = validate(&fragment("🙂🙂 <b>x</i>")).expect_err("mismatch");
    assert_eq!(err.position(), Position::new(7, 1, 8));
}

#[test]
fn error_positions_track_lines() {
    let err = validate(&fragment("line one\n<b>two\nthree</u>")).expect_err("mismatch");
    assert_eq!(err.position().line, 3);
    assert_eq!(err.position().column, 6);
}

#[test]
fn validating_rendered_text_is_a_no_op() {
    let source = fragment(
        "<strong>Day &amp; night</strong> 1 < 2 <a href='https://x.test/?a=1&b=\"2\"'>go</a> \
         <pre>&lt;b&gt;</pre> &copy;",
    );
    let first = parse(&source).expect("valid");
    let rendered = first.render();
    let second = parse(&TextFragment::from_text("again", rendered.as_str())).expect("still valid");
    assert_eq!(first.nodes(), second.nodes());
    assert_eq!(second.render(), rendered);
}

#[test]
fn escaped_literals_parse_back_to_one_text_node() {
    let original = "if a<b && b>c then &lt; stays literal";
    let escaped = escape_text(original);
    let document = parse(&TextFragment::from_text("x", &escaped)).expect("valid");
    assert_eq!(document.nodes(), &[MarkupNode::text(original)]);
}

#[test]
fn already_escaped_input_is_decoded_once() {
    let rendered = validate_str("x", "&amp;lt;").expect("valid");
    assert_eq!(rendered.as_str(), "&amp;lt;");
    let document = parse(&TextFragment::from_text("x", "&amp;lt;")).expect("valid");
    assert_eq!(document.plain_text(), "&lt;");
}

#[test]
fn self_closing_allowed_tag_renders_empty_element() {
    let rendered = validate_str("x", "a<b/>c").expect("valid");
    assert_eq!(rendered.as_str(), "a<b></b>c");
}

#[test]
fn output_is_deterministic() {
    let text = "<b>x</b> <i>y</i> & <u>z</u>";
    let first = validate_str("x", text).expect("valid");
    for _ in 0..10 {
        assert_eq!(validate_str("x", text).expect("valid"), first);
    }
}

#[test]
fn element_tree_exposes_tags() {
    let document = parse(&fragment("<a href=\"http://x.test\">x</a>")).expect("valid");
    let MarkupNode::Element(link) = &document.nodes()[0] else {
        panic!("expected element");
    };
    assert_eq!(link.tag, AllowedTag::Link);
    assert_eq!(link.href(), Some("http://x.test"));
}

#[test]
fn rendered_message_snapshot() {
    let rendered = validate(&fragment(
        "<STRONG>Day 3</STRONG>\n\
         Read <a href=https://example.org/read?x=1&y=2>this</a> & reflect.\n\
         <pre>fn main() { println!(\"<hi>\"); }</pre>\n\
         <span class='tg-spoiler'>surprise</span> <3",
    ))
    .expect("valid");
    insta::assert_snapshot!(rendered.as_str(), @r#"
    <b>Day 3</b>
    Read <a href="https://example.org/read?x=1&amp;y=2">this</a> &amp; reflect.
    <pre>fn main() { println!("&lt;hi&gt;"); }</pre>
    <tg-spoiler>surprise</tg-spoiler> &lt;3
    "#);
}
