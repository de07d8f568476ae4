//! Caret snapshots and the per-surface selection port.

use crate::error::EditorError;
use crate::target::EditableTarget;
use html::DomRange;

/// A restorable snapshot of the caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaretState {
    /// Container node and offsets on a rich surface.
    Range(DomRange),
    /// Byte offset into a plain field's value.
    Offset(usize),
}

/// How carets are read from and written to a surface. Chosen once at bind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPort {
    RangeBased,
    OffsetBased,
}

impl SelectionPort {
    pub fn for_target(target: &EditableTarget) -> Self {
        if target.is_rich() {
            SelectionPort::RangeBased
        } else {
            SelectionPort::OffsetBased
        }
    }

    /// Snapshot the surface's active selection.
    ///
    /// `None` when nothing is selected or the platform has no selection API.
    pub fn capture(self, target: &EditableTarget) -> Option<CaretState> {
        match (self, target) {
            (SelectionPort::RangeBased, EditableTarget::Rich(region)) => {
                region.selection().map(CaretState::Range)
            }
            (SelectionPort::OffsetBased, EditableTarget::Plain(field)) => {
                field.selection_start().map(CaretState::Offset)
            }
            _ => None,
        }
    }

    /// Make `caret` the surface's active selection.
    pub fn restore(self, target: &mut EditableTarget, caret: CaretState) -> Result<(), EditorError> {
        let applied = match (self, target, caret) {
            (SelectionPort::RangeBased, EditableTarget::Rich(region), CaretState::Range(range)) => {
                region.set_selection(Some(range))
            }
            (SelectionPort::OffsetBased, EditableTarget::Plain(field), CaretState::Offset(at)) => {
                field.set_selection_range(at, at)
            }
            _ => {
                return Err(EditorError::invalid(
                    "restore_caret",
                    "caret kind does not match the surface",
                ));
            }
        };
        if applied {
            Ok(())
        } else {
            Err(EditorError::UnsupportedPlatform)
        }
    }

    /// Restore `caret`, then read back what the platform kept.
    pub fn place(self, target: &mut EditableTarget, caret: CaretState) -> Option<CaretState> {
        if let Err(err) = self.restore(target, caret) {
            log::debug!(target: "editor.caret", "caret not placed: {err}");
        }
        self.capture(target)
    }
}
