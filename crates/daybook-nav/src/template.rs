//! Placeholder substitution for navigation descriptors.
//!
//! Descriptors are plain markup with `{name}` placeholders. There is no
//! templating language beyond that: known names are replaced, anything else
//! stays verbatim and is validated as ordinary text.

use daybook_markup::escape_attribute;

/// A placeholder the assembler knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Previous,
    Next,
    Current,
    Position,
    Total,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::Previous,
        Placeholder::Next,
        Placeholder::Current,
        Placeholder::Position,
        Placeholder::Total,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Current => "current",
            Self::Position => "position",
            Self::Total => "total",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Values substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues {
    pub previous: String,
    pub next: String,
    pub current: String,
    pub position: usize,
    pub total: usize,
}

impl TemplateValues {
    fn get(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::Previous => self.previous.clone(),
            Placeholder::Next => self.next.clone(),
            Placeholder::Current => self.current.clone(),
            Placeholder::Position => self.position.to_string(),
            Placeholder::Total => self.total.to_string(),
        }
    }
}

/// Replace known placeholders; values are escaped so they read as text.
///
/// A value never completes a character reference begun in the template:
/// an unterminated `&` right before a placeholder is escaped first.
pub fn substitute(template: &str, values: &TemplateValues) -> String {
    let mut out = String::with_capacity(template.len());
    let mut open_reference = None;
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let text = &rest[..open];
        open_reference = track_reference(open_reference, out.len(), text);
        out.push_str(text);
        let after = &rest[open + 1..];
        match placeholder_at(after) {
            Some((placeholder, len)) => {
                if let Some(amp) = open_reference {
                    out.replace_range(amp..=amp, "&amp;");
                }
                let value = escape_attribute(&values.get(placeholder));
                open_reference = track_reference(None, out.len(), &value);
                out.push_str(&value);
                rest = &after[len + 1..];
            }
            None => {
                open_reference = None;
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Byte index of a trailing `&` still waiting for its `;` once `pushed` is
/// appended at `base`.
fn track_reference(open: Option<usize>, base: usize, pushed: &str) -> Option<usize> {
    let is_name = |c: char| c.is_ascii_alphanumeric() || c == '#';
    match pushed.rfind('&') {
        Some(amp) => pushed[amp + 1..].chars().all(is_name).then_some(base + amp),
        None => open.filter(|_| pushed.chars().all(is_name)),
    }
}

/// Identifier-shaped placeholders that are not recognised.
///
/// Useful for flagging typos in descriptors; rendering never fails on them.
pub fn unknown_placeholders(template: &str) -> Vec<String> {
    let mut unknown = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        if let Some(name) = identifier_at(after)
            && Placeholder::from_name(name).is_none()
            && !unknown.iter().any(|u| u == name)
        {
            unknown.push(name.to_string());
        }
        rest = after;
    }
    unknown
}

/// A known placeholder name followed by `}` at the start of `input`.
fn placeholder_at(input: &str) -> Option<(Placeholder, usize)> {
    let name = identifier_at(input)?;
    Placeholder::from_name(name).map(|p| (p, name.len()))
}

/// An identifier followed by `}` at the start of `input`.
///
/// Only the identifier itself is scanned, so a pass over a template stays
/// linear however many braces it has.
fn identifier_at(input: &str) -> Option<&str> {
    let end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(input.len());
    let name = &input[..end];
    (!name.is_empty() && input[end..].starts_with('}')).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> TemplateValues {
        TemplateValues {
            previous: "Day 1".to_string(),
            next: "Day 10".to_string(),
            current: "Day 2".to_string(),
            position: 2,
            total: 3,
        }
    }

    #[test]
    fn replaces_known_placeholders() {
        assert_eq!(
            substitute("{previous} < {current} ({position}/{total}) > {next}", &values()),
            "Day 1 < Day 2 (2/3) > Day 10"
        );
    }

    #[test]
    fn leaves_unknown_placeholders_verbatim() {
        assert_eq!(
            substitute("{curent} {current} {} {a b} {", &values()),
            "{curent} Day 2 {} {a b} {"
        );
    }

    #[test]
    fn escapes_substituted_values() {
        let values = TemplateValues {
            current: "<b>&\"".to_string(),
            ..TemplateValues::default()
        };
        assert_eq!(substitute("{current}", &values), "&lt;b&gt;&amp;&quot;");
    }

    #[test]
    fn values_cannot_complete_a_reference() {
        assert_eq!(
            substitute("x&#{position}{total};y", &values()),
            "x&amp;#23;y"
        );
        assert_eq!(substitute("&amp{current}", &values()), "&amp;ampDay 2");
        assert_eq!(substitute("&amp; {current}", &values()), "&amp; Day 2");
        assert_eq!(substitute("a & {current}", &values()), "a & Day 2");
    }

    #[test]
    fn nested_braces_keep_inner_placeholder() {
        assert_eq!(substitute("{{current}}", &values()), "{Day 2}");
    }

    #[test]
    fn lists_unknown_placeholders_once() {
        assert_eq!(
            unknown_placeholders("{curent} {current} {curent} {next_day} {not one}"),
            vec!["curent".to_string(), "next_day".to_string()]
        );
    }

    #[test]
    fn unclosed_braces_do_not_swallow_later_placeholders() {
        assert_eq!(unknown_placeholders("{a {b}"), vec!["b".to_string()]);
        let template = format!("{}{{current}}", "{x ".repeat(10_000));
        let substituted = substitute(&template, &values());
        assert!(substituted.ends_with("{x Day 2"));
    }
}
