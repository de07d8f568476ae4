//! Text control trait used at the editor boundary.
//!
//! Editors splice into a control only through this trait, so a host can back
//! a plain surface with its own widget state instead of [`TextField`].

use crate::field::TextField;
use crate::selection::SelectionRange;

/// The subset of a text control an inserting editor needs.
pub trait TextControl {
    /// Current value.
    fn value(&self) -> &str;

    /// Selection start as a byte offset, or `None` without a selection API.
    fn selection_start(&self) -> Option<usize>;

    /// Select `start..end`. Returns `false` when the control cannot do so.
    fn set_selection_range(&mut self, start: usize, end: usize) -> bool;

    /// Insert `text` at `at` (clamped) and return the inserted range.
    fn splice(&mut self, at: usize, text: &str) -> SelectionRange;
}

impl TextControl for TextField {
    fn value(&self) -> &str {
        TextField::value(self)
    }

    fn selection_start(&self) -> Option<usize> {
        TextField::selection_start(self)
    }

    fn set_selection_range(&mut self, start: usize, end: usize) -> bool {
        TextField::set_selection_range(self, start, end)
    }

    fn splice(&mut self, at: usize, text: &str) -> SelectionRange {
        TextField::splice(self, at, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splice_at_selection<C: TextControl>(control: &mut C, text: &str) -> SelectionRange {
        let at = control.selection_start().unwrap_or(control.value().len());
        let inserted = control.splice(at, text);
        control.set_selection_range(inserted.end, inserted.end);
        inserted
    }

    #[test]
    fn works_through_generic_bound() {
        let mut field = TextField::single_line("abcd");
        field.set_caret(2, false);
        let inserted = splice_at_selection(&mut field, "X");
        assert_eq!(field.value(), "abXcd");
        assert_eq!(inserted, SelectionRange::new(2, 3));
        assert_eq!(field.caret(), 3);
    }

    #[test]
    fn trait_object_dispatch() {
        let mut field = TextField::multi_line("");
        let control: &mut dyn TextControl = &mut field;
        let inserted = control.splice(0, "a\r\nb");
        assert_eq!(control.value(), "a\nb");
        assert_eq!(inserted, SelectionRange::new(0, 3));
    }
}
