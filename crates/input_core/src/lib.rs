//! # input_core
//!
//! UI-agnostic plain text control state.
//!
//! - [`TextField`]: value, caret and selection of one `<input>`/`<textarea>`
//! - [`TextControl`]: the seam editors splice through
//! - [`SelectionRange`]: a normalized byte range
//!
//! Offsets are UTF-8 byte indices kept on character boundaries. The crate
//! depends only on `std`.

mod field;
mod selection;
mod text;
mod traits;

pub use field::TextField;
pub use selection::SelectionRange;
pub use traits::TextControl;

pub use text::{
    clamp_to_char_boundary, filter_single_line, is_zero_width, normalize_newlines,
    strip_zero_width,
};
