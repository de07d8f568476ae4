/// Failure to decode a hex emoji token.
///
/// Callers use this to tell "not an emoji token" apart from a valid token;
/// serializers typically degrade the offending node to an empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The token (or one of its dash-separated halves) was empty.
    Empty,
    /// A part contained something other than 1-6 ASCII hex digits.
    InvalidHex { part: String },
    /// The hex value is not a Unicode scalar value (surrogate or > U+10FFFF).
    InvalidScalar { value: u32 },
    /// More dash-separated parts than a token may carry.
    TooManyCodepoints { count: usize },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Empty => write!(f, "empty emoji token"),
            DecodeError::InvalidHex { part } => write!(f, "invalid hex codepoint: {part:?}"),
            DecodeError::InvalidScalar { value } => {
                write!(f, "not a unicode scalar value: U+{value:X}")
            }
            DecodeError::TooManyCodepoints { count } => {
                write!(f, "token has {count} codepoints, at most 2 are supported")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
