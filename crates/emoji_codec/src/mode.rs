use std::str::FromStr;

/// Output form for emoji content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// The native unicode character.
    #[default]
    Unicode,
    /// An inline `<img>` fragment.
    Image,
    /// Colon shortcode text. The codec renders the literal character here;
    /// turning it into `:name:` is left to a shortcode converter.
    ColonText,
}

impl EncodingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EncodingMode::Unicode => "utf8",
            EncodingMode::Image => "img",
            EncodingMode::ColonText => "colons",
        }
    }
}

impl std::fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseModeError {
    pub input: String,
}

impl std::fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown encoding mode: {:?}", self.input)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for EncodingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utf8") || s.eq_ignore_ascii_case("unicode") {
            Ok(EncodingMode::Unicode)
        } else if s.eq_ignore_ascii_case("img") || s.eq_ignore_ascii_case("image") {
            Ok(EncodingMode::Image)
        } else if s.eq_ignore_ascii_case("colons") {
            Ok(EncodingMode::ColonText)
        } else {
            Err(ParseModeError {
                input: s.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_names_case_insensitively() {
        assert_eq!("utf8".parse(), Ok(EncodingMode::Unicode));
        assert_eq!("IMG".parse(), Ok(EncodingMode::Image));
        assert_eq!(" colons ".parse(), Ok(EncodingMode::ColonText));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "sprite".parse::<EncodingMode>().unwrap_err();
        assert_eq!(err.input, "sprite");
    }

    #[test]
    fn display_matches_parse() {
        for mode in [
            EncodingMode::Unicode,
            EncodingMode::Image,
            EncodingMode::ColonText,
        ] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }
}
