use emoji_codec::DecodeError;

/// Failure of an editor operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorError {
    /// A token could not be decoded.
    Decode(DecodeError),
    /// The operation does not apply to this surface.
    InvalidOperation {
        operation: &'static str,
        reason: &'static str,
    },
    /// The host exposes no selection API, so the caret could not be placed.
    UnsupportedPlatform,
}

impl EditorError {
    pub(crate) fn invalid(operation: &'static str, reason: &'static str) -> Self {
        EditorError::InvalidOperation { operation, reason }
    }
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorError::Decode(err) => write!(f, "token decode failed: {err}"),
            EditorError::InvalidOperation { operation, reason } => {
                write!(f, "{operation} is not valid here: {reason}")
            }
            EditorError::UnsupportedPlatform => write!(f, "no selection API available"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecodeError> for EditorError {
    fn from(err: DecodeError) -> Self {
        EditorError::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn decode_errors_convert_and_chain() {
        let err: EditorError = DecodeError::Empty.into();
        assert_eq!(err, EditorError::Decode(DecodeError::Empty));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("empty emoji token"));
    }

    #[test]
    fn invalid_operation_names_the_call() {
        let err = EditorError::invalid("replace_unified_representation", "plain text field");
        assert_eq!(
            err.to_string(),
            "replace_unified_representation is not valid here: plain text field"
        );
        assert!(err.source().is_none());
    }
}
