use emoji_codec::{EncodingMode, MarkupConfig, ParseModeError};
use std::str::FromStr;

/// What `get_html` produces on a rich surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Walk the content and render emoji markers in the given encoding.
    Encode(EncodingMode),
    /// Return the surface's inner markup unmodified.
    RawMarkup,
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::Encode(EncodingMode::Unicode)
    }
}

impl OutputMode {
    /// Encoding used for emoji markers; `RawMarkup` never consults it.
    pub fn encoding(self) -> Option<EncodingMode> {
        match self {
            OutputMode::Encode(mode) => Some(mode),
            OutputMode::RawMarkup => None,
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Encode(mode) => write!(f, "{mode}"),
            OutputMode::RawMarkup => f.write_str("html"),
        }
    }
}

/// Accepts the host's `save_html_as` names: `utf8`, `img`, `colons`, `html`.
impl FromStr for OutputMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("html") {
            return Ok(OutputMode::RawMarkup);
        }
        s.parse().map(OutputMode::Encode)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorConfig {
    /// Swallow Enter on rich surfaces.
    pub prevent_newline: bool,
    pub output_mode: OutputMode,
    /// Image markup settings used for insertion, `Image` output and unified
    /// replacement.
    pub markup: MarkupConfig,
}
