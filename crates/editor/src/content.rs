//! Serialization view of a rich surface.
//!
//! The live tree is classified into [`ContentNode`]s and each variant renders
//! itself either as plain text or as normalized markup. Emoji markers are
//! decoded here; a marker that fails to decode renders as an empty string.

use emoji_codec::{EncodingMode, MarkupConfig, decode_token, render, render_character};
use html::dom_utils::{attr, find_descendant_with_class};
use html::{Node, escape_text, outer_html};
use std::borrow::Cow;

pub const EMOJI_INNER_CLASS: &str = "emoji-inner";
pub const CODEPOINTS_ATTR: &str = "data-codepoints";

/// An emoji-bearing element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Attached token; `None` when the element carries no emoji data.
    pub token: Option<String>,
    /// The marker element itself.
    pub node: &'a Node,
}

impl Marker<'_> {
    /// The element's own outer markup.
    pub fn raw_markup(&self) -> String {
        outer_html(self.node)
    }
}

/// Serialization view of one node. Element variants borrow the live node;
/// outer markup is only produced when rendering markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentNode<'a> {
    Text(&'a str),
    EmojiMarker(Marker<'a>),
    LineBreak,
    Script,
    Style,
    Link,
    GenericElement {
        children: Vec<ContentNode<'a>>,
        node: &'a Node,
    },
    Comment,
}

impl<'a> ContentNode<'a> {
    pub fn classify(node: &'a Node) -> ContentNode<'a> {
        let name = match node {
            Node::Text { text, .. } => return ContentNode::Text(text),
            Node::Comment { .. } => return ContentNode::Comment,
            Node::Element { name, .. } => name.as_str(),
        };
        match name {
            "br" => ContentNode::LineBreak,
            "script" => ContentNode::Script,
            "style" => ContentNode::Style,
            "link" => ContentNode::Link,
            "span" => {
                let token = find_descendant_with_class(node, EMOJI_INNER_CLASS)
                    .map(|inner| attr(inner, CODEPOINTS_ATTR).unwrap_or("").to_string());
                ContentNode::EmojiMarker(Marker { token, node })
            }
            "img" => ContentNode::EmojiMarker(Marker {
                token: attr(node, CODEPOINTS_ATTR).map(str::to_string),
                node,
            }),
            _ => ContentNode::GenericElement {
                children: Self::classify_children(node),
                node,
            },
        }
    }

    pub fn classify_children(node: &'a Node) -> Vec<ContentNode<'a>> {
        node.children()
            .map(|children| children.iter().map(Self::classify).collect())
            .unwrap_or_default()
    }

    /// Plain-text contribution of this node, before zero-width stripping.
    pub fn render_text(&self, out: &mut String) {
        match self {
            ContentNode::Text(text) => out.push_str(text),
            ContentNode::EmojiMarker(marker) => {
                if let Some(token) = marker.token.as_deref() {
                    match decode_token(token) {
                        Ok(token) => out.push_str(&render_character(&token)),
                        Err(err) => log_bad_token(token, &err),
                    }
                }
            }
            ContentNode::LineBreak => out.push('\n'),
            ContentNode::GenericElement { children, .. } => {
                for child in children {
                    child.render_text(out);
                }
            }
            ContentNode::Script | ContentNode::Style | ContentNode::Link | ContentNode::Comment => {}
        }
    }

    /// Markup contribution of this node, before zero-width stripping.
    pub fn render_html(&self, mode: EncodingMode, markup: &MarkupConfig, out: &mut String) {
        match self {
            ContentNode::Text(text) => out.push_str(&escape_text(text)),
            ContentNode::EmojiMarker(marker) => match marker.token.as_deref() {
                None => out.push_str(&marker.raw_markup()),
                Some(token) => match decode_token(token) {
                    Ok(token) => out.push_str(&render(&token, mode, markup)),
                    Err(err) => log_bad_token(token, &err),
                },
            },
            ContentNode::GenericElement { node, .. } => out.push_str(&outer_html(node)),
            ContentNode::LineBreak
            | ContentNode::Script
            | ContentNode::Style
            | ContentNode::Link
            | ContentNode::Comment => {}
        }
    }
}

fn log_bad_token(token: &str, err: &emoji_codec::DecodeError) {
    log::debug!(target: "editor.serialize", "dropping marker {token:?}: {err}");
}

/// Flattened text of `root`'s children with selection anchors removed.
pub fn extract_text(root: &Node) -> String {
    let mut out = String::new();
    for node in ContentNode::classify_children(root) {
        node.render_text(&mut out);
    }
    strip_anchors(out)
}

/// Normalized markup of `root`'s children with selection anchors removed.
pub fn extract_html(root: &Node, mode: EncodingMode, markup: &MarkupConfig) -> String {
    let mut out = String::new();
    for node in ContentNode::classify_children(root) {
        node.render_html(mode, markup, &mut out);
    }
    strip_anchors(out)
}

fn strip_anchors(s: String) -> String {
    match input_core::strip_zero_width(&s) {
        Cow::Borrowed(_) => s,
        Cow::Owned(stripped) => stripped,
    }
}
