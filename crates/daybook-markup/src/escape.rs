//! Escaping for the chat HTML dialect.
//!
//! Only `<`, `>` and `&` are special in text. Attribute values are always
//! emitted double-quoted, so `"` is escaped there as well.

/// Escape text so it renders literally.
///
/// # Examples
///
/// ```
/// use daybook_markup::escape_text;
///
/// assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
/// assert_eq!(escape_text("привет 🙂"), "привет 🙂");
/// ```
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);
    for c in text.chars() {
        push_escaped(&mut result, c);
    }
    result
}

/// Escape a value for a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => result.push_str("&quot;"),
            _ => push_escaped(&mut result, c),
        }
    }
    result
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        _ => out.push(c),
    }
}

/// Longest entity body we try to recognise (`#x10FFFF`).
const MAX_ENTITY_BODY: usize = 8;

/// Decode a character reference at the start of `input`.
///
/// `input` must start with `&`. Returns the decoded character and the number
/// of bytes consumed, including the leading `&` and trailing `;`. Only the
/// named references of the dialect and numeric references are recognised;
/// anything else is not an entity and the `&` stays literal.
pub(crate) fn decode_entity(input: &str) -> Option<(char, usize)> {
    let rest = input.strip_prefix('&')?;
    let end = rest
        .char_indices()
        .take(MAX_ENTITY_BODY + 1)
        .find(|(_, c)| *c == ';')
        .map(|(i, _)| i)?;
    let body = &rest[..end];
    let decoded = match body {
        "lt" => '<',
        "gt" => '>',
        "amp" => '&',
        "quot" => '"',
        "apos" => '\'',
        _ => decode_numeric(body)?,
    };
    Some((decoded, end + 2))
}

fn decode_numeric(body: &str) -> Option<char> {
    let digits = body.strip_prefix('#')?;
    let value = if let Some(hex) = digits
        .strip_prefix('x')
        .or_else(|| digits.strip_prefix('X'))
    {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok()?
    } else {
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u32>().ok()?
    };
    if value == 0 {
        return None;
    }
    char::from_u32(value)
}
