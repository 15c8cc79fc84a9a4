//! Single left-to-right scan producing a flat token stream.
//!
//! Text runs have character references decoded. A `<` only starts a tag
//! when a syntactically complete tag with an allow-listed name follows;
//! otherwise the `<` is literal text and scanning continues after it.

use std::collections::BTreeMap;

use daybook_model::Position;

use crate::escape::decode_entity;
use crate::tag::AllowedTag;

/// Longest tag, in scalar values, that the scanner looks ahead for. A
/// longer `<...>` run reads as literal text.
pub(crate) const MAX_TAG_CHARS: usize = 8192;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Text {
        text: String,
        position: Position,
    },
    Open {
        tag: AllowedTag,
        name: String,
        attributes: BTreeMap<String, String>,
        self_closing: bool,
        position: Position,
    },
    Close {
        tag: AllowedTag,
        name: String,
        position: Position,
    },
}

/// Read position over the source, tracking scalar offset, line and column.
#[derive(Debug, Clone)]
struct Cursor<'a> {
    src: &'a str,
    byte: usize,
    position: Position,
    /// Scalar offset at which the cursor behaves as if the input ended.
    limit: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            byte: 0,
            position: Position::start(),
            limit: usize::MAX,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.byte..]
    }

    fn peek(&self) -> Option<char> {
        if self.position.offset >= self.limit {
            return None;
        }
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        self.position.offset += 1;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    /// Advance over `len` bytes of ASCII.
    fn skip_ascii(&mut self, len: usize) {
        for _ in 0..len {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.byte;
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
        &self.src[start..self.byte]
    }
}

/// A syntactically complete tag, before allow-list classification.
#[derive(Debug)]
struct RawTag {
    name: String,
    closing: bool,
    attributes: BTreeMap<String, String>,
    self_closing: bool,
}

#[derive(Debug, Default)]
pub(crate) struct Lexer {
    tokens: Vec<Token>,
    text: String,
    text_start: Position,
    /// One entry per open `span`; `true` when it opened a spoiler.
    spans: Vec<bool>,
}

impl Lexer {
    pub(crate) fn tokenize(src: &str) -> Vec<Token> {
        let mut lexer = Self::default();
        let mut cursor = Cursor::new(src);
        while let Some(c) = cursor.peek() {
            match c {
                '<' => lexer.lex_angle(&mut cursor),
                '&' => lexer.lex_reference(&mut cursor),
                _ => {
                    let position = cursor.position;
                    cursor.bump();
                    lexer.push_char(c, position);
                }
            }
        }
        lexer.flush_text();
        lexer.tokens
    }

    fn lex_angle(&mut self, cursor: &mut Cursor<'_>) {
        let position = cursor.position;
        let mut probe = cursor.clone();
        probe.limit = position.offset.saturating_add(MAX_TAG_CHARS);
        probe.bump();
        if let Some(raw) = parse_tag(&mut probe)
            && let Some(token) = self.classify(raw, position)
        {
            self.flush_text();
            self.tokens.push(token);
            *cursor = probe;
            return;
        }
        cursor.bump();
        self.push_char('<', position);
    }

    fn lex_reference(&mut self, cursor: &mut Cursor<'_>) {
        let position = cursor.position;
        match decode_entity(cursor.rest()) {
            Some((decoded, consumed)) => {
                cursor.skip_ascii(consumed);
                self.push_char(decoded, position);
            }
            None => {
                cursor.bump();
                self.push_char('&', position);
            }
        }
    }

    /// Map a raw tag onto the allow-list; `None` means literal text.
    fn classify(&mut self, raw: RawTag, position: Position) -> Option<Token> {
        if raw.name == "span" {
            return self.classify_span(raw, position);
        }
        let tag = AllowedTag::from_name(&raw.name)?;
        Some(if raw.closing {
            Token::Close {
                tag,
                name: raw.name,
                position,
            }
        } else {
            Token::Open {
                tag,
                name: raw.name,
                attributes: raw.attributes,
                self_closing: raw.self_closing,
                position,
            }
        })
    }

    fn classify_span(&mut self, raw: RawTag, position: Position) -> Option<Token> {
        if raw.closing {
            // Only a close paired with a spoiler span is markup.
            return match self.spans.pop() {
                Some(true) => Some(Token::Close {
                    tag: AllowedTag::Spoiler,
                    name: raw.name,
                    position,
                }),
                Some(false) | None => None,
            };
        }
        let tag = AllowedTag::from_open_tag(&raw.name, &raw.attributes);
        if !raw.self_closing {
            self.spans.push(tag.is_some());
        }
        let tag = tag?;
        Some(Token::Open {
            tag,
            name: raw.name,
            attributes: raw.attributes,
            self_closing: raw.self_closing,
            position,
        })
    }

    fn push_char(&mut self, c: char, position: Position) {
        if self.text.is_empty() {
            self.text_start = position;
        }
        self.text.push(c);
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(Token::Text {
                text: std::mem::take(&mut self.text),
                position: self.text_start,
            });
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_attribute_name_char(c: char) -> bool {
    !(c.is_whitespace() || matches!(c, '=' | '>' | '/' | '"' | '\'' | '<'))
}

/// Parse a tag body; the cursor sits just after `<`.
fn parse_tag(cursor: &mut Cursor<'_>) -> Option<RawTag> {
    let closing = cursor.eat('/');
    if !cursor.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let name = cursor.take_while(is_name_char).to_ascii_lowercase();
    if name != "span" && AllowedTag::from_name(&name).is_none() {
        return None;
    }
    let mut attributes = BTreeMap::new();

    if closing {
        cursor.skip_whitespace();
        return cursor.eat('>').then_some(RawTag {
            name,
            closing,
            attributes,
            self_closing: false,
        });
    }

    loop {
        let had_space = cursor.peek().is_some_and(char::is_whitespace);
        cursor.skip_whitespace();
        match cursor.peek()? {
            '>' => {
                cursor.bump();
                return Some(RawTag {
                    name,
                    closing,
                    attributes,
                    self_closing: false,
                });
            }
            '/' => {
                cursor.bump();
                return cursor.eat('>').then_some(RawTag {
                    name,
                    closing,
                    attributes,
                    self_closing: true,
                });
            }
            _ if !had_space => return None,
            _ => {
                let (key, value) = parse_attribute(cursor)?;
                attributes.entry(key).or_insert(value);
            }
        }
    }
}

fn parse_attribute(cursor: &mut Cursor<'_>) -> Option<(String, String)> {
    let key = cursor.take_while(is_attribute_name_char);
    if key.is_empty() {
        return None;
    }
    let key = key.to_ascii_lowercase();
    let mut probe = cursor.clone();
    probe.skip_whitespace();
    if !probe.eat('=') {
        return Some((key, String::new()));
    }
    probe.skip_whitespace();
    let value = match probe.peek()? {
        quote @ ('"' | '\'') => {
            probe.bump();
            let value = read_attribute_value(&mut probe, |c| c == quote)?;
            probe.bump();
            value
        }
        _ => {
            let value = read_attribute_value(&mut probe, |c| c.is_whitespace() || c == '>')?;
            if value.is_empty() {
                return None;
            }
            value
        }
    };
    *cursor = probe;
    Some((key, value))
}

/// Read up to (not including) the terminator, decoding references.
///
/// Returns `None` if the source ends first.
fn read_attribute_value(
    cursor: &mut Cursor<'_>,
    is_terminator: impl Fn(char) -> bool,
) -> Option<String> {
    let mut value = String::new();
    loop {
        let c = cursor.peek()?;
        if is_terminator(c) {
            return Some(value);
        }
        if c == '&'
            && let Some((decoded, consumed)) = decode_entity(cursor.rest())
        {
            cursor.skip_ascii(consumed);
            value.push(decoded);
            continue;
        }
        cursor.bump();
        value.push(c);
    }
}
