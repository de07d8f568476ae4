//! # emoji_codec
//!
//! Stateless conversions between the compact hex token form of an emoji and
//! its renderings.
//!
//! - [`decode_token`]: `"1f600"` or `"1f468-200d"` into an [`EmojiToken`]
//! - [`render_character`]: the literal unicode string
//! - [`render_markup`]: an `<img>` fragment keyed by the source token
//! - [`render`]: dispatch on an [`EncodingMode`]
//!
//! The crate has no knowledge of editable surfaces; callers decide where the
//! rendered strings go.

mod error;
mod mode;
mod render;
mod token;

pub use error::DecodeError;
pub use mode::{EncodingMode, ParseModeError};
pub use render::{MarkupConfig, escape_attribute, render, render_character, render_markup};
pub use token::{EmojiToken, MAX_CODEPOINTS, TokenJoin, decode_token};
