//! Fragment tokenizer for markup pasted into, or serialized from, an editable region.
//!
//! Tag and attribute names are ASCII `[A-Za-z0-9:_-]`, lowercased on the way out.
//! `<script>` and `<style>` bodies are scanned as raw text so their content never
//! becomes markup. Doctypes and other `<!...>` declarations are dropped.
//!
//! Known limitations (intentional):
//! - No HTML5 parse-error recovery; stray `<` that does not start a tag is kept as text.
//! - Raw text close tags accept only ASCII whitespace before `>`.

use crate::entities::decode_entities;
use crate::types::Token;
use memchr::memchr;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

const SCRIPT_CLOSE_TAG: &[u8] = b"</script";
const STYLE_CLOSE_TAG: &[u8] = b"</style";

pub(crate) fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

pub(crate) fn is_rawtext_element(name: &str) -> bool {
    name == "script" || name == "style"
}

#[inline]
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

/// Tokenize a markup fragment.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner {
        input,
        bytes: input.as_bytes(),
        pos: 0,
        out: Vec::new(),
    };
    scanner.run();
    scanner.out
}

// Slices are only cut at ASCII structural bytes or after ASCII-only runs, so
// every slice endpoint stays on a UTF-8 boundary.
struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    out: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn run(&mut self) {
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] != b'<' {
                self.text_run();
                continue;
            }
            let input = self.input;
            let rest = &input[self.pos..];
            if rest.starts_with(COMMENT_START) {
                self.comment();
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                self.declaration();
            } else if self.bytes.get(self.pos + 1) == Some(&b'/') {
                self.end_tag();
            } else if self
                .bytes
                .get(self.pos + 1)
                .is_some_and(|b| b.is_ascii_alphabetic())
            {
                self.start_tag();
            } else {
                // Lone '<' is literal text.
                self.push_text("<");
                self.pos += 1;
            }
        }
    }

    fn push_text(&mut self, raw: &str) {
        let decoded = decode_entities(raw);
        if decoded.is_empty() {
            return;
        }
        if let Some(Token::Text(prev)) = self.out.last_mut() {
            prev.push_str(&decoded);
        } else {
            self.out.push(Token::Text(decoded.into_owned()));
        }
    }

    fn text_run(&mut self) {
        let start = self.pos;
        let end = memchr(b'<', &self.bytes[start..]).map_or(self.bytes.len(), |rel| start + rel);
        self.pos = end;
        let input = self.input;
        self.push_text(&input[start..end]);
    }

    fn comment(&mut self) {
        let body_start = self.pos + COMMENT_START.len();
        match self.input[body_start..].find(COMMENT_END) {
            Some(rel) => {
                let body = &self.input[body_start..body_start + rel];
                self.out.push(Token::Comment(body.to_string()));
                self.pos = body_start + rel + COMMENT_END.len();
            }
            None => {
                self.out
                    .push(Token::Comment(self.input[body_start..].to_string()));
                self.pos = self.bytes.len();
            }
        }
    }

    fn declaration(&mut self) {
        self.pos = memchr(b'>', &self.bytes[self.pos..])
            .map_or(self.bytes.len(), |rel| self.pos + rel + 1);
    }

    fn name_at(&mut self, start: usize) -> String {
        let mut end = start;
        while end < self.bytes.len() && is_name_byte(self.bytes[end]) {
            end += 1;
        }
        self.pos = end;
        self.input[start..end].to_ascii_lowercase()
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn end_tag(&mut self) {
        let name = self.name_at(self.pos + 2);
        self.pos = memchr(b'>', &self.bytes[self.pos..])
            .map_or(self.bytes.len(), |rel| self.pos + rel + 1);
        if !name.is_empty() {
            self.out.push(Token::EndTag(name));
        }
    }

    fn start_tag(&mut self) {
        let name = self.name_at(self.pos + 1);
        let mut attributes = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            let Some(&b) = self.bytes.get(self.pos) else {
                break;
            };
            match b {
                b'>' => {
                    self.pos += 1;
                    break;
                }
                b'/' if self.bytes.get(self.pos + 1) == Some(&b'>') => {
                    self_closing = true;
                    self.pos += 2;
                    break;
                }
                b if is_name_byte(b) => {
                    let attr = self.name_at(self.pos);
                    let value = self.attribute_value();
                    attributes.push((attr, value));
                }
                _ => self.pos += 1,
            }
        }

        let self_closing = self_closing || is_void_element(&name);
        let rawtext = !self_closing && is_rawtext_element(&name);
        self.out.push(Token::StartTag {
            name: name.clone(),
            attributes,
            self_closing,
        });

        if rawtext {
            self.rawtext(name);
        }
    }

    fn attribute_value(&mut self) -> Option<String> {
        let before = self.pos;
        self.skip_whitespace();
        if self.bytes.get(self.pos) != Some(&b'=') {
            self.pos = before;
            return None;
        }
        self.pos += 1;
        self.skip_whitespace();

        match self.bytes.get(self.pos) {
            Some(&quote @ (b'"' | b'\'')) => {
                let start = self.pos + 1;
                let end = memchr(quote, &self.bytes[start..]).map_or(self.bytes.len(), |rel| start + rel);
                let raw = &self.input[start..end];
                self.pos = (end + 1).min(self.bytes.len());
                Some(decode_entities(raw).into_owned())
            }
            _ => {
                let start = self.pos;
                while self.pos < self.bytes.len() {
                    let b = self.bytes[self.pos];
                    if b.is_ascii_whitespace()
                        || b == b'>'
                        || (b == b'/' && self.bytes.get(self.pos + 1) == Some(&b'>'))
                    {
                        break;
                    }
                    self.pos += 1;
                }
                Some(decode_entities(&self.input[start..self.pos]).into_owned())
            }
        }
    }

    fn rawtext(&mut self, name: String) {
        let close_tag = if name == "script" {
            SCRIPT_CLOSE_TAG
        } else {
            STYLE_CLOSE_TAG
        };
        let start = self.pos;
        match find_rawtext_close(&self.bytes[start..], close_tag) {
            Some((rel_start, rel_end)) => {
                let body = &self.input[start..start + rel_start];
                if !body.is_empty() {
                    self.out.push(Token::Text(body.to_string()));
                }
                self.pos = start + rel_end;
            }
            None => {
                let body = &self.input[start..];
                if !body.is_empty() {
                    self.out.push(Token::Text(body.to_string()));
                }
                self.pos = self.bytes.len();
            }
        }
        self.out.push(Token::EndTag(name));
    }
}

/// Find `</script\s*>` (or the style equivalent), case-insensitively.
/// Returns the byte offsets of the tag's `<` and one past its `>`.
fn find_rawtext_close(hay: &[u8], close_tag: &[u8]) -> Option<(usize, usize)> {
    let n = close_tag.len();
    let mut i = 0;
    while i + n <= hay.len() {
        i += memchr(b'<', &hay[i..])?;
        if i + n > hay.len() {
            return None;
        }
        if hay[i..i + n].eq_ignore_ascii_case(close_tag) {
            let mut k = i + n;
            while k < hay.len() && hay[k].is_ascii_whitespace() {
                k += 1;
            }
            if hay.get(k) == Some(&b'>') {
                return Some((i, k + 1));
            }
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(name: &str, attributes: &[(&str, Option<&str>)], self_closing: bool) -> Token {
        Token::StartTag {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                .collect(),
            self_closing,
        }
    }

    #[test]
    fn tokenizes_emoji_image_fragment() {
        let tokens = tokenize(r#"<IMG class="emoji-img" data-codepoints="1f600" alt="😀">&#8203;"#);
        assert_eq!(
            tokens,
            vec![
                start(
                    "img",
                    &[
                        ("class", Some("emoji-img")),
                        ("data-codepoints", Some("1f600")),
                        ("alt", Some("😀")),
                    ],
                    true
                ),
                Token::Text("\u{200B}".to_string()),
            ]
        );
    }

    #[test]
    fn preserves_utf8_text_around_tags() {
        let tokens = tokenize("¡Hola <b>café</b> 😊");
        assert_eq!(
            tokens,
            vec![
                Token::Text("¡Hola ".to_string()),
                start("b", &[], false),
                Token::Text("café".to_string()),
                Token::EndTag("b".to_string()),
                Token::Text(" 😊".to_string()),
            ]
        );
    }

    #[test]
    fn script_body_is_raw_text() {
        let tokens = tokenize("<script>if (a < b) { x = '<b>'; }</ScRiPt >after");
        assert_eq!(
            tokens,
            vec![
                start("script", &[], false),
                Token::Text("if (a < b) { x = '<b>'; }".to_string()),
                Token::EndTag("script".to_string()),
                Token::Text("after".to_string()),
            ]
        );
    }

    #[test]
    fn rawtext_near_match_does_not_close() {
        let tokens = tokenize("<style>a</stylex>b</style>");
        assert_eq!(
            tokens,
            vec![
                start("style", &[], false),
                Token::Text("a</stylex>b".to_string()),
                Token::EndTag("style".to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_rawtext_closes_implicitly() {
        let tokens = tokenize("<script>x<y>");
        assert_eq!(
            tokens,
            vec![
                start("script", &[], false),
                Token::Text("x<y>".to_string()),
                Token::EndTag("script".to_string()),
            ]
        );
    }

    #[test]
    fn attribute_forms() {
        let tokens = tokenize("<my-el data-x=1 hidden title='a &amp; b'/>");
        assert_eq!(
            tokens,
            vec![start(
                "my-el",
                &[
                    ("data-x", Some("1")),
                    ("hidden", None),
                    ("title", Some("a & b")),
                ],
                true
            )]
        );
    }

    #[test]
    fn comments_and_doctypes() {
        let tokens = tokenize("<!DOCTYPE html><!--note-->x<!--open");
        assert_eq!(
            tokens,
            vec![
                Token::Comment("note".to_string()),
                Token::Text("x".to_string()),
                Token::Comment("open".to_string()),
            ]
        );
    }

    #[test]
    fn lone_angle_bracket_is_text() {
        let tokens = tokenize("a < b <3");
        assert_eq!(tokens, vec![Token::Text("a < b <3".to_string())]);
    }

    #[test]
    fn handles_many_angle_brackets() {
        let input = "<".repeat(50_000);
        let tokens = tokenize(&input);
        assert_eq!(tokens, vec![Token::Text(input)]);
    }
}
