//! Navigation message rendering.

use daybook_markup::MarkupErrorKind;
use daybook_model::{FolderEntry, Ordinal, Program, TextFragment};
use daybook_nav::{LinkKind, RenderOptions, render, resolve};

fn folder(ordinal: u32) -> FolderEntry {
    FolderEntry::new(Ordinal::new(ordinal), format!("{ordinal}_day"))
}

fn with_descriptor(ordinal: u32, template: &str) -> FolderEntry {
    folder(ordinal).with_navigation_descriptor(TextFragment::from_text(
        format!("{ordinal}_day/msg.txt"),
        template,
    ))
}

#[test]
fn default_template_lists_neighbours() {
    let program = Program::new(vec![folder(1), folder(2), folder(10)]);
    let state = resolve(&program, Ordinal::new(2)).expect("resolves");
    let message = render(&state, &RenderOptions::default()).expect("renders");

    insta::assert_snapshot!(message.text.as_str(), @r"
    <b>Day 2</b> (2/3)
    ◀ Day 1
    Day 10 ▶
    ");
    assert!(!message.wants_web_preview);

    let callbacks: Vec<(LinkKind, &str)> = message
        .links
        .iter()
        .map(|l| (l.kind, l.callback.as_str()))
        .collect();
    assert_eq!(
        callbacks,
        [
            (LinkKind::Previous, "day_1"),
            (LinkKind::Next, "day_10"),
            (LinkKind::Home, "nav_main"),
        ]
    );
}

#[test]
fn default_template_at_the_start() {
    let program = Program::new(vec![folder(1), folder(2)]);
    let state = resolve(&program, Ordinal::new(1)).expect("resolves");
    let message = render(&state, &RenderOptions::default()).expect("renders");
    assert_eq!(message.text.as_str(), "<b>Day 1</b> (1/2)\nDay 2 ▶");
    assert_eq!(message.links.len(), 2);
}

#[test]
fn descriptor_placeholders_are_substituted() {
    let program = Program::new(vec![
        folder(1),
        with_descriptor(
            2,
            "<strong>{current}</strong>: back to {previous}, on to {next} \
             ({position} of {total})",
        ),
        folder(3),
    ]);
    let state = resolve(&program, Ordinal::new(2)).expect("resolves");
    let options = RenderOptions {
        wants_web_preview: true,
        ..RenderOptions::default()
    };
    let message = render(&state, &options).expect("renders");
    assert_eq!(
        message.text.as_str(),
        "<b>Day 2</b>: back to Day 1, on to Day 3 (2 of 3)"
    );
    assert!(message.wants_web_preview);
}

#[test]
fn unknown_placeholders_stay_verbatim() {
    let program = Program::new(vec![with_descriptor(1, "{curent} & {current}")]);
    let state = resolve(&program, Ordinal::new(1)).expect("resolves");
    let message = render(&state, &RenderOptions::default()).expect("renders");
    assert_eq!(message.text.as_str(), "{curent} &amp; Day 1");
}

#[test]
fn substituted_numbers_stay_text_after_an_ampersand() {
    let program = Program::new(vec![with_descriptor(1, "x&#{position}{total};y")]);
    let state = resolve(&program, Ordinal::new(1)).expect("resolves");
    let message = render(&state, &RenderOptions::default()).expect("renders");
    assert_eq!(message.text.as_str(), "x&amp;#11;y");
}

#[test]
fn labels_are_escaped() {
    let program = Program::new(vec![folder(1)]);
    let state = resolve(&program, Ordinal::new(1)).expect("resolves");
    let options = RenderOptions {
        label_format: "<i>Day</i> {n}".to_string(),
        ..RenderOptions::default()
    };
    let message = render(&state, &options).expect("renders");
    assert_eq!(
        message.text.as_str(),
        "<b>&lt;i&gt;Day&lt;/i&gt; 1</b> (1/1)"
    );
}

#[test]
fn descriptor_errors_propagate_with_descriptor_origin() {
    let program = Program::new(vec![with_descriptor(1, "<a href=\"ftp://x\">{next}</a>")]);
    let state = resolve(&program, Ordinal::new(1)).expect("resolves");
    let err = render(&state, &RenderOptions::default()).expect_err("bad link");
    assert_eq!(err.origin.as_str(), "1_day/msg.txt");
    assert!(matches!(err.kind, MarkupErrorKind::LinkScheme { ref url, .. } if url == "ftp://x"));
}

#[test]
fn descriptor_encoding_errors_propagate() {
    let entry = folder(1).with_navigation_descriptor(TextFragment::new(
        "1_day/msg.txt",
        b"\xFF{current}".to_vec(),
    ));
    let program = Program::new(vec![entry]);
    let state = resolve(&program, Ordinal::new(1)).expect("resolves");
    let err = render(&state, &RenderOptions::default()).expect_err("bad encoding");
    assert!(matches!(err.kind, MarkupErrorKind::Encoding { valid_up_to: 0, .. }));
}

#[test]
fn rendering_is_deterministic() {
    let program = Program::new(vec![folder(1), folder(2), folder(3)]);
    let state = resolve(&program, Ordinal::new(2)).expect("resolves");
    let first = render(&state, &RenderOptions::default()).expect("renders");
    let second = render(&state, &RenderOptions::default()).expect("renders");
    assert_eq!(first, second);
}
