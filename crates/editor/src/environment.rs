//! Platform-dependent conversions the editor delegates to the host.

use emoji_codec::{DecodeError, EmojiToken, MarkupConfig, decode_token, render_character, render_markup};
use std::collections::BTreeMap;

/// Host capabilities consulted by the editor.
pub trait Environment {
    /// Whether combined glyphs render natively, so insertion can use the
    /// character instead of image markup. Consulted once per insertion.
    fn supports_native_combined_glyphs(&self) -> bool;

    /// Convert unified characters in `markup` to the form this platform
    /// displays, rendering any image markup with `config`.
    fn replace_unified(&self, markup: &str, config: &MarkupConfig) -> String;

    /// Turn `:name:` shortcodes in plain text into characters.
    fn replace_colons(&self, text: &str) -> String;
}

const DEFAULT_SHORTCODES: &[(&str, &str)] = &[
    ("+1", "1f44d"),
    ("fire", "1f525"),
    ("grinning", "1f600"),
    ("heart", "2764"),
    ("joy", "1f602"),
    ("man", "1f468"),
    ("rocket", "1f680"),
    ("smile", "1f604"),
    ("star", "2b50"),
    ("tada", "1f389"),
    ("thumbsup", "1f44d"),
    ("wink", "1f609"),
    ("woman", "1f469"),
];

/// Shortcode name to token mapping.
#[derive(Clone, Debug, Default)]
pub struct ShortcodeTable {
    entries: BTreeMap<String, EmojiToken>,
}

impl ShortcodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A small built-in set of common names.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (name, token) in DEFAULT_SHORTCODES {
            if let Err(err) = table.insert(name, token) {
                log::debug!(target: "editor.env", "skipping builtin :{name}: ({err})");
            }
        }
        table
    }

    /// Add or replace `name`. The token is decoded up front.
    pub fn insert(&mut self, name: &str, token: &str) -> Result<(), DecodeError> {
        let token = decode_token(token)?;
        self.entries.insert(name.to_string(), token);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&EmojiToken> {
        self.entries.get(name)
    }

    pub fn character(&self, name: &str) -> Option<String> {
        self.get(name).map(render_character)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EmojiToken)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Replace every known `:name:`; unknown names stay as typed.
    pub fn replace_colons(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(open) = rest.find(':') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let name_len = after
                .find(|c: char| !is_shortcode_char(c))
                .unwrap_or(after.len());
            let name = &after[..name_len];
            if !name.is_empty() && after[name_len..].starts_with(':') {
                if let Some(character) = self.character(name) {
                    out.push_str(&character);
                    rest = &after[name_len + 1..];
                    continue;
                }
            }
            out.push(':');
            rest = after;
        }
        out.push_str(rest);
        out
    }

    /// Distinct characters in the table, longest first.
    fn glyphs(&self) -> Vec<(String, &EmojiToken)> {
        let mut glyphs: Vec<(String, &EmojiToken)> = Vec::with_capacity(self.entries.len());
        for token in self.entries.values() {
            let glyph = render_character(token);
            if !glyphs.iter().any(|(g, _)| *g == glyph) {
                glyphs.push((glyph, token));
            }
        }
        glyphs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        glyphs
    }
}

fn is_shortcode_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-')
}

/// Fixed-capability environment backed by a [`ShortcodeTable`].
#[derive(Clone, Debug)]
pub struct StaticEnvironment {
    pub native_glyphs: bool,
    pub shortcodes: ShortcodeTable,
}

impl StaticEnvironment {
    /// Platform that renders combined glyphs itself.
    pub fn native() -> Self {
        Self {
            native_glyphs: true,
            shortcodes: ShortcodeTable::builtin(),
        }
    }

    /// Platform that needs image markup for emoji.
    pub fn decomposed() -> Self {
        Self {
            native_glyphs: false,
            ..Self::native()
        }
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::native()
    }
}

impl Environment for StaticEnvironment {
    fn supports_native_combined_glyphs(&self) -> bool {
        self.native_glyphs
    }

    /// Known characters in text runs become image markup when glyphs are not
    /// native. Tags, including their quoted attribute values, are copied as is.
    fn replace_unified(&self, markup: &str, config: &MarkupConfig) -> String {
        if self.native_glyphs {
            return markup.to_string();
        }
        let glyphs = self.shortcodes.glyphs();
        let mut out = String::with_capacity(markup.len());
        let mut in_tag = false;
        let mut quote: Option<char> = None;
        let mut rest = markup;
        while let Some(c) = rest.chars().next() {
            if in_tag {
                match (quote, c) {
                    (Some(q), c) if c == q => quote = None,
                    (None, '"' | '\'') => quote = Some(c),
                    (None, '>') => in_tag = false,
                    _ => {}
                }
            } else if c == '<' {
                in_tag = true;
            } else if let Some((glyph, token)) =
                glyphs.iter().find(|(g, _)| rest.starts_with(g.as_str()))
            {
                out.push_str(&render_markup(token, config));
                rest = &rest[glyph.len()..];
                continue;
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
        out
    }

    fn replace_colons(&self, text: &str) -> String {
        self.shortcodes.replace_colons(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_decodes() {
        let table = ShortcodeTable::builtin();
        assert_eq!(table.len(), DEFAULT_SHORTCODES.len());
        assert_eq!(table.character("smile").as_deref(), Some("\u{1F604}"));
        assert!(table.iter().any(|(name, _)| name == "+1"));
    }

    #[test]
    fn insert_rejects_bad_tokens() {
        let mut table = ShortcodeTable::new();
        assert!(table.insert("broken", "zz").is_err());
        assert!(table.is_empty());
        table.insert("cat", "1f431").expect("valid token");
        assert_eq!(table.character("cat").as_deref(), Some("\u{1F431}"));
    }

    #[test]
    fn replaces_known_colons_only() {
        let table = ShortcodeTable::builtin();
        assert_eq!(table.replace_colons("hi :smile:!"), "hi \u{1F604}!");
        assert_eq!(table.replace_colons(":nope: :+1:"), ":nope: \u{1F44D}");
        assert_eq!(table.replace_colons("12:30 :wink:"), "12:30 \u{1F609}");
        assert_eq!(table.replace_colons("trailing:"), "trailing:");
        assert_eq!(table.replace_colons(":: :heart:"), ":: \u{2764}");
    }

    #[test]
    fn native_environment_keeps_markup() {
        let env = StaticEnvironment::native();
        assert!(env.supports_native_combined_glyphs());
        assert_eq!(
            env.replace_unified("a\u{1F604}", &MarkupConfig::default()),
            "a\u{1F604}"
        );
    }

    #[test]
    fn decomposed_environment_swaps_text_glyphs() {
        let env = StaticEnvironment::decomposed();
        let config = MarkupConfig::default();
        let out = env.replace_unified("<b title=\"\u{1F604}\">x\u{1F604}</b>", &config);
        assert!(out.starts_with("<b title=\"\u{1F604}\">x<img "));
        assert!(out.contains(r#"data-codepoints="1f604""#));
        assert!(out.ends_with("</b>"));
        assert_eq!(env.replace_unified(&out, &config), out, "already converted markup is stable");
    }

    #[test]
    fn unified_swap_uses_given_markup_config() {
        let env = StaticEnvironment::decomposed();
        let config = MarkupConfig {
            image_base: "/static/emoji/".to_string(),
            class_name: "chat-emoji".to_string(),
            ..MarkupConfig::default()
        };
        let out = env.replace_unified("\u{2B50}", &config);
        assert!(out.contains(r#"class="chat-emoji""#), "{out}");
        assert!(out.contains(r#"src="/static/emoji/2b50.png""#), "{out}");
    }

    #[test]
    fn colon_replacement_through_trait() {
        let env = StaticEnvironment::default();
        assert_eq!(Environment::replace_colons(&env, ":tada:"), "\u{1F389}");
    }
}
