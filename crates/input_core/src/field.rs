//! Value, caret and selection of one plain text control.
//!
//! The field does no layout or measurement. Hosts translate pointer and key
//! input into byte offsets and then drive the field through these methods.

use crate::selection::SelectionRange;
use crate::text::{clamp_to_char_boundary, filter_single_line, normalize_newlines};
use std::borrow::Cow;

/// State of an `<input>`- or `<textarea>`-like control.
///
/// # Example
///
/// ```
/// use input_core::TextField;
///
/// let mut field = TextField::single_line("Hello");
/// field.set_caret(0, false);
/// let inserted = field.splice(5, " World");
///
/// assert_eq!(field.value(), "Hello World");
/// assert_eq!(inserted.start, 5);
/// assert_eq!(field.caret(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct TextField {
    value: String,

    /// Byte index into `value`, always on a char boundary.
    caret: usize,

    /// When `Some(anchor)`, the selection is `min(anchor, caret)..max(anchor, caret)`.
    selection_anchor: Option<usize>,

    multiline: bool,

    /// Whether the host exposes `selectionStart`/`setSelectionRange`.
    selection_api: bool,

    focused: bool,
}

impl TextField {
    /// Caret starts at the end of `value`.
    pub fn new(value: impl Into<String>, multiline: bool) -> Self {
        let value = value.into();
        let value = if multiline {
            normalize_newlines(&value).into_owned()
        } else {
            filter_single_line(&value).into_owned()
        };
        Self {
            caret: value.len(),
            value,
            selection_anchor: None,
            multiline,
            selection_api: true,
            focused: false,
        }
    }

    pub fn single_line(value: impl Into<String>) -> Self {
        Self::new(value, false)
    }

    pub fn multi_line(value: impl Into<String>) -> Self {
        Self::new(value, true)
    }

    /// Model a legacy control without selection offsets.
    pub fn without_selection_api(mut self) -> Self {
        self.selection_api = false;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Current non-empty selection, if any.
    pub fn selection(&self) -> Option<SelectionRange> {
        let anchor = clamp_to_char_boundary(&self.value, self.selection_anchor?);
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        (anchor != caret).then(|| SelectionRange::new(anchor, caret))
    }

    /// The control's reported selection start.
    ///
    /// `None` when the host has no selection API.
    pub fn selection_start(&self) -> Option<usize> {
        if !self.selection_api {
            return None;
        }
        Some(self.selection().map_or(self.caret, |s| s.start))
    }

    /// Clamps the caret; an existing selection survives focusing.
    pub fn focus(&mut self) {
        self.clamp();
        self.focused = true;
    }

    /// Overwrite the value. The caret moves to the end and the selection clears.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.value = self.normalize(&value).into_owned();
        self.caret = self.value.len();
        self.selection_anchor = None;
    }

    pub fn clear(&mut self) {
        self.set_value(String::new());
    }

    /// Select `start..end`, leaving the caret at `end`.
    ///
    /// Returns `false` and changes nothing when the host has no selection API.
    pub fn set_selection_range(&mut self, start: usize, end: usize) -> bool {
        if !self.selection_api {
            return false;
        }
        let start = clamp_to_char_boundary(&self.value, start);
        let end = clamp_to_char_boundary(&self.value, end);
        self.caret = end;
        self.selection_anchor = (start != end).then_some(start);
        true
    }

    /// Insert `text` at byte offset `at`, which is clamped to the current value.
    ///
    /// Newlines are filtered or normalized for the control's line mode. The
    /// caret and selection are left alone; the returned range covers the
    /// inserted text.
    pub fn splice(&mut self, at: usize, text: &str) -> SelectionRange {
        let at = clamp_to_char_boundary(&self.value, at);
        let text = self.normalize(text);
        if text.is_empty() {
            return SelectionRange::caret(at);
        }
        self.value.insert_str(at, &text);
        if self.caret > at {
            self.caret += text.len();
        }
        if let Some(anchor) = self.selection_anchor.as_mut().filter(|a| **a > at) {
            *anchor += text.len();
        }
        SelectionRange::new(at, at + text.len())
    }

    /// Place the caret, optionally extending the selection from the old caret.
    pub fn set_caret(&mut self, caret: usize, selecting: bool) {
        self.clamp();
        let caret = clamp_to_char_boundary(&self.value, caret);
        if selecting {
            let anchor = *self.selection_anchor.get_or_insert(self.caret);
            self.caret = caret;
            if anchor == caret {
                self.selection_anchor = None;
            }
        } else {
            self.caret = caret;
            self.selection_anchor = None;
        }
    }

    fn normalize<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.multiline {
            normalize_newlines(s)
        } else {
            filter_single_line(s)
        }
    }

    fn clamp(&mut self) {
        self.caret = clamp_to_char_boundary(&self.value, self.caret);
        if let Some(a) = self.selection_anchor {
            self.selection_anchor = Some(clamp_to_char_boundary(&self.value, a));
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::single_line(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splice_keeps_offsets_on_char_boundaries() {
        let mut field = TextField::default();
        let range = field.splice(0, "€");
        assert_eq!(field.value(), "€");
        assert_eq!(range, SelectionRange::new(0, 3));
        assert!(field.value().is_char_boundary(range.end));
    }

    #[test]
    fn single_line_strips_newlines() {
        let mut field = TextField::single_line("a\nb");
        assert_eq!(field.value(), "ab");
        field.splice(2, "\r\nc");
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn multi_line_normalizes_newlines() {
        let mut field = TextField::multi_line("a\r\nb");
        assert_eq!(field.value(), "a\nb");
        field.splice(0, "x\ry");
        assert_eq!(field.value(), "x\nya\nb");
    }

    #[test]
    fn splice_leaves_selection_around_insertion() {
        let mut field = TextField::single_line("hello");
        assert!(field.set_selection_range(1, 4));
        assert_eq!(field.selection(), Some(SelectionRange::new(1, 4)));
        field.splice(0, "oh ");
        assert_eq!(field.value(), "oh hello");
        assert_eq!(field.selection(), Some(SelectionRange::new(4, 7)));
    }

    #[test]
    fn splice_clamps_and_reports_inserted_range() {
        let mut field = TextField::single_line("ab");
        let range = field.splice(99, "€");
        assert_eq!(field.value(), "ab€");
        assert_eq!(range, SelectionRange::new(2, 5));

        let range = field.splice(3, "x");
        assert_eq!(range.start, 2, "mid-character offset clamps backwards");
    }

    #[test]
    fn splice_shifts_caret_after_insertion_point() {
        let mut field = TextField::single_line("abcd");
        field.set_caret(3, false);
        field.splice(1, "XY");
        assert_eq!(field.value(), "aXYbcd");
        assert_eq!(field.caret(), 5);
    }

    #[test]
    fn selection_start_without_api() {
        let mut field = TextField::single_line("abc").without_selection_api();
        assert_eq!(field.selection_start(), None);
        assert!(!field.set_selection_range(0, 1));
        assert_eq!(field.caret(), 3);
    }

    #[test]
    fn selection_start_tracks_selection() {
        let mut field = TextField::single_line("abcdef");
        field.set_caret(4, false);
        field.set_caret(2, true);
        assert_eq!(field.selection_start(), Some(2));
        assert_eq!(field.selection(), Some(SelectionRange::new(2, 4)));
    }

    #[test]
    fn set_value_moves_caret_to_end() {
        let mut field = TextField::single_line("abc");
        field.set_caret(1, false);
        field.set_value("wxyz");
        assert_eq!(field.caret(), 4);
        assert_eq!(field.selection(), None);
        field.clear();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn focus_keeps_selection() {
        let mut field = TextField::single_line("abc");
        field.set_selection_range(0, 2);
        field.focus();
        assert!(field.is_focused());
        assert_eq!(field.selection_start(), Some(0));
    }
}
