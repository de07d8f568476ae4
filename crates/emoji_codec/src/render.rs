//! Rendering decoded tokens as characters or image markup.

use crate::mode::EncodingMode;
use crate::token::EmojiToken;
use std::fmt::Write;

const DEFAULT_IMAGE_BASE: &str = "http://emojistatic.github.io/images/64/";
const DEFAULT_CLASS_NAME: &str = "emoji-img";
const DEFAULT_SIZE_EM: f32 = 1.2;

/// Settings for [`render_markup`].
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupConfig {
    /// Prefix prepended to `{token}.png`.
    pub image_base: String,
    /// Class attribute of the generated `<img>`.
    pub class_name: String,
    /// Width, height and font size of the image, in `em`.
    pub size_em: f32,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            size_em: DEFAULT_SIZE_EM,
        }
    }
}

/// The literal unicode string for a token: each codepoint converted on its
/// own and concatenated.
pub fn render_character(token: &EmojiToken) -> String {
    token.codepoints().iter().collect()
}

/// An `<img>` fragment for the token.
///
/// The image path uses the source token string unmodified, so a pair such
/// as `1f468-200d` maps to `1f468-200d.png`. The fragment also carries the
/// token in `data-codepoints` so editors can decode it again.
pub fn render_markup(token: &EmojiToken, config: &MarkupConfig) -> String {
    let character = render_character(token);
    let key = token.source().trim_ascii();
    let mut out = String::with_capacity(192);
    let _ = write!(
        out,
        r#"<img class="{class}" data-codepoints="{key}" src="{base}{key}.png" style="width:{size}em;height:{size}em;font-size:{size}em;vertical-align:text-bottom;" alt="{alt}">"#,
        class = escape_attribute(&config.class_name),
        key = escape_attribute(key),
        base = escape_attribute(&config.image_base),
        size = config.size_em,
        alt = escape_attribute(&character),
    );
    out
}

/// Render a token in the requested mode.
///
/// `ColonText` yields the character as well; producing `:name:` needs a
/// shortcode table and is not the codec's job.
pub fn render(token: &EmojiToken, mode: EncodingMode, config: &MarkupConfig) -> String {
    match mode {
        EncodingMode::Unicode | EncodingMode::ColonText => render_character(token),
        EncodingMode::Image => render_markup(token, config),
    }
}

/// Escape a string for use inside a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> std::borrow::Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return std::borrow::Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    std::borrow::Cow::Owned(out)
}
