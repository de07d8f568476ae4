//! # html
//!
//! Fragment-level DOM used as the content tree of a rich editable region.
//!
//! - [`tokenize`] / [`parse_fragment`]: markup into [`Node`]s with fresh [`Id`]s
//! - [`outer_html`] / [`inner_html`]: nodes back into markup
//! - [`DomRange`] and [`insert_at_range`]: caret-relative tree edits
//! - [`dom_utils`] / [`traverse`]: lookups and walks

pub mod dom_utils;
pub mod range;
pub mod serialize;
pub mod traverse;

mod dom_builder;
mod entities;
mod tokenizer;
mod types;

pub use crate::dom_builder::{MAX_NESTING_DEPTH, parse_fragment};
pub use crate::entities::{decode_entities, escape_attr, escape_text};
pub use crate::range::{
    DomRange, Insertion, clamp_range, insert_at_range, range_after_node, replace_children,
    select_node_contents,
};
pub use crate::serialize::{inner_html, inner_html_of, outer_html};
pub use crate::tokenizer::tokenize;
pub use crate::traverse::IdAllocator;
pub use crate::types::{Id, Node, NodeId, Token};
