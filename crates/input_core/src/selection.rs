//! Text selection representation.

/// A text selection as a byte range.
///
/// The range is always normalized such that `start <= end`.
/// Both offsets are byte indices into a UTF-8 string and sit on character
/// boundaries when produced by [`TextField`](crate::TextField).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: usize,
    /// End byte offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range, normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Zero-width range at `offset`.
    #[inline]
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the selected substring, or `None` if the range is out of bounds
    /// or splits a character.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> Option<&'a str> {
        value.get(self.start..self.end)
    }
}
