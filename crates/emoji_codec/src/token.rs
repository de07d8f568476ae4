//! Hex token parsing.

use crate::error::DecodeError;
use std::str::FromStr;

/// Upper bound on codepoints in a single token.
pub const MAX_CODEPOINTS: usize = 2;

const MAX_HEX_DIGITS: usize = 6; // 10FFFF

/// How the token was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenJoin {
    /// `"1f600"`
    Single,
    /// `"1f468-200d"`
    Pair,
}

/// A decoded emoji token: one or two codepoints plus the text they came from.
///
/// The source string is kept verbatim because image paths are keyed by it,
/// not by the decoded codepoints.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmojiToken {
    codepoints: Vec<char>,
    join: TokenJoin,
    source: String,
}

impl EmojiToken {
    #[inline]
    pub fn codepoints(&self) -> &[char] {
        &self.codepoints
    }

    #[inline]
    pub fn join(&self) -> TokenJoin {
        self.join
    }

    /// The token string exactly as it was decoded.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FromStr for EmojiToken {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_token(s)
    }
}

impl std::fmt::Display for EmojiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Decode a token of the form `hex` or `hex-hex`.
///
/// Both halves of a pair are kept: they render as one combined character.
///
/// # Examples
///
/// ```
/// use emoji_codec::{TokenJoin, decode_token};
///
/// let token = decode_token("1F468-200D").unwrap();
/// assert_eq!(token.codepoints(), &['\u{1F468}', '\u{200D}']);
/// assert_eq!(token.join(), TokenJoin::Pair);
/// assert!(decode_token("zz").is_err());
/// ```
pub fn decode_token(token: &str) -> Result<EmojiToken, DecodeError> {
    if token.trim_ascii().is_empty() {
        return Err(DecodeError::Empty);
    }

    let count = token.split('-').count();
    if count > MAX_CODEPOINTS {
        return Err(DecodeError::TooManyCodepoints { count });
    }

    let codepoints = token
        .split('-')
        .map(parse_codepoint)
        .collect::<Result<Vec<_>, _>>()?;

    let join = if codepoints.len() == 1 {
        TokenJoin::Single
    } else {
        TokenJoin::Pair
    };

    Ok(EmojiToken {
        codepoints,
        join,
        source: token.to_string(),
    })
}

fn parse_codepoint(part: &str) -> Result<char, DecodeError> {
    let part = part.trim_ascii();
    if part.is_empty() {
        return Err(DecodeError::Empty);
    }
    // from_str_radix accepts a leading '+', so validate digits up front.
    if part.len() > MAX_HEX_DIGITS || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DecodeError::InvalidHex {
            part: part.to_string(),
        });
    }
    let value = u32::from_str_radix(part, 16).map_err(|_| DecodeError::InvalidHex {
        part: part.to_string(),
    })?;
    char::from_u32(value).ok_or(DecodeError::InvalidScalar { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_hex_decodes_to_one_scalar() {
        let token = decode_token("1f600").unwrap();
        assert_eq!(token.codepoints(), &['\u{1F600}']);
        assert_eq!(token.join(), TokenJoin::Single);
        assert_eq!(token.source(), "1f600");
    }

    #[test]
    fn pair_keeps_both_halves() {
        let token = decode_token("1F468-200D").unwrap();
        assert_eq!(token.codepoints(), &['\u{1F468}', '\u{200D}']);
        assert_eq!(token.join(), TokenJoin::Pair);
        assert_eq!(token.source(), "1F468-200D");
    }

    #[test]
    fn short_bmp_tokens_decode() {
        assert_eq!(decode_token("2764").unwrap().codepoints(), &['\u{2764}']);
        assert_eq!(decode_token("a9").unwrap().codepoints(), &['\u{A9}']);
    }

    #[test]
    fn whitespace_around_parts_is_ignored() {
        let token = decode_token(" 1f44d ").unwrap();
        assert_eq!(token.codepoints(), &['\u{1F44D}']);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(decode_token(""), Err(DecodeError::Empty));
        assert_eq!(decode_token("  "), Err(DecodeError::Empty));
        assert_eq!(decode_token("1f600-"), Err(DecodeError::Empty));
        assert!(matches!(
            decode_token("xyz"),
            Err(DecodeError::InvalidHex { .. })
        ));
        assert!(matches!(
            decode_token("+1f6"),
            Err(DecodeError::InvalidHex { .. })
        ));
        assert!(matches!(
            decode_token("1234567"),
            Err(DecodeError::InvalidHex { .. })
        ));
    }

    #[test]
    fn rejects_non_scalar_values() {
        assert_eq!(
            decode_token("d800"),
            Err(DecodeError::InvalidScalar { value: 0xD800 })
        );
        assert_eq!(
            decode_token("110000"),
            Err(DecodeError::InvalidScalar { value: 0x110000 })
        );
    }

    #[test]
    fn rejects_more_than_two_parts() {
        assert_eq!(
            decode_token("1f468-200d-1f469"),
            Err(DecodeError::TooManyCodepoints { count: 3 })
        );
    }

    #[test]
    fn from_str_matches_decode() {
        let token: EmojiToken = "1f44d".parse().unwrap();
        assert_eq!(token, decode_token("1f44d").unwrap());
        assert_eq!(token.to_string(), "1f44d");
    }
}
