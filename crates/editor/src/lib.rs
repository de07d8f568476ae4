//! # editor
//!
//! Emoji insertion and serialization for one editable surface.
//!
//! An [`EmojiEditor`] owns an [`EditableTarget`]: either a rich
//! contenteditable region (an `html::Node` tree) or a plain text field
//! (`input_core::TextField`). It tracks the caret across host events,
//! intercepts paste on rich surfaces, inserts prepared emoji content at the
//! caret, and reads the surface back as plain text or normalized markup.
//!
//! ```
//! use editor::{EditorConfig, EmojiEditor, RichRegion, StaticEnvironment};
//!
//! let mut editor = EmojiEditor::bind(
//!     RichRegion::from_markup("hi ").into(),
//!     EditorConfig::default(),
//!     StaticEnvironment::decomposed(),
//! );
//! editor.insert_emoji("1f600").unwrap();
//! assert_eq!(editor.get_text(), "hi \u{1F600}");
//! ```

mod caret;
mod config;
mod content;
mod controller;
mod environment;
mod error;
mod events;
mod target;

pub use caret::{CaretState, SelectionPort};
pub use config::{EditorConfig, OutputMode};
pub use content::{CODEPOINTS_ATTR, ContentNode, EMOJI_INNER_CLASS, Marker, extract_html, extract_text};
pub use controller::{EmojiEditor, InsertedHandle, PreparedInsertion};
pub use environment::{Environment, ShortcodeTable, StaticEnvironment};
pub use error::EditorError;
pub use events::{
    Clipboard, EventKind, EventOutcome, Key, SubscriptionId, Subscriptions, SurfaceChange,
    SurfaceEvent,
};
pub use target::{EditableTarget, RichRegion};
