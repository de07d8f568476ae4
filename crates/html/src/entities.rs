//! Entity decoding for parsed text and escaping for serialized markup.

use memchr::{memchr, memchr3};
use std::borrow::Cow;

const NAMED: &[(&[u8], char)] = &[
    (b"amp;", '&'),
    (b"lt;", '<'),
    (b"gt;", '>'),
    (b"quot;", '"'),
    (b"apos;", '\''),
    (b"nbsp;", '\u{00A0}'),
];

const MAX_HEX_DIGITS: usize = 6; // 10FFFF
const MAX_DEC_DIGITS: usize = 7; // 1114111

/// Decode a narrow set of HTML entities.
///
/// Contract:
/// - Named: `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;`.
/// - Numeric, semicolon-terminated only: `&#8203;` and `&#x200B;`.
/// - Anything else (unknown names, missing `;`, non-scalar values) is left as written.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let Some(first) = memchr(b'&', bytes) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..first]);
    let mut i = first;

    while i < bytes.len() {
        if bytes[i] != b'&' {
            let next = memchr(b'&', &bytes[i..]).map_or(bytes.len(), |rel| i + rel);
            out.push_str(&s[i..next]);
            i = next;
            continue;
        }

        match decode_one(&bytes[i + 1..]) {
            Some((ch, consumed)) => {
                out.push(ch);
                i += 1 + consumed;
            }
            None => {
                out.push('&');
                i += 1;
            }
        }
    }

    Cow::Owned(out)
}

/// Decode the entity following a `&`. Returns the character and the number of
/// bytes consumed after the ampersand.
fn decode_one(rest: &[u8]) -> Option<(char, usize)> {
    if let Some(&(name, ch)) = NAMED.iter().find(|(name, _)| rest.starts_with(name)) {
        return Some((ch, name.len()));
    }

    let digits = rest.strip_prefix(b"#")?;
    let (radix, prefix, max_digits, digits) = match digits.first() {
        Some(b'x' | b'X') => (16, 2, MAX_HEX_DIGITS, &digits[1..]),
        _ => (10, 1, MAX_DEC_DIGITS, digits),
    };

    let len = digits
        .iter()
        .take(max_digits + 1)
        .position(|&b| b == b';')?;
    if len == 0 {
        return None;
    }
    let text = std::str::from_utf8(&digits[..len]).ok()?;
    if !text.bytes().all(|b| b.is_ascii_hexdigit() && (radix == 16 || b.is_ascii_digit())) {
        return None;
    }
    let ch = u32::from_str_radix(text, radix).ok().and_then(char::from_u32)?;
    Some((ch, prefix + len + 1))
}

/// Escape text content for serialization (`&`, `<`, `>`).
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if memchr3(b'&', b'<', b'>', s.as_bytes()).is_none() {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Escape a double-quoted attribute value (`&`, `"`).
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '"']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
