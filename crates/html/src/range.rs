//! Single-container ranges over a node tree.
//!
//! A [`DomRange`] names one container node and two offsets into it: child
//! indices when the container is an element, byte offsets (on UTF-8 character
//! boundaries) when it is a text or comment node. Every operation here takes
//! the tree root explicitly; ranges hold no references.

use crate::traverse::{IdAllocator, find_node, find_node_mut, locate_parent};
use crate::{Id, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DomRange {
    pub container: Id,
    pub start: usize,
    pub end: usize,
}

impl DomRange {
    /// Build a range; offsets are normalized so `start <= end`.
    #[inline]
    pub fn new(container: Id, a: usize, b: usize) -> Self {
        Self {
            container,
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[inline]
    pub fn collapsed(container: Id, offset: usize) -> Self {
        Self::new(container, offset, offset)
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn collapse(self, to_end: bool) -> Self {
        let at = if to_end { self.end } else { self.start };
        Self::collapsed(self.container, at)
    }
}

/// Where an insertion ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insertion {
    /// Element that received the inserted nodes.
    pub parent: Id,
    /// Ids of the inserted top-level nodes, in order.
    pub nodes: Vec<Id>,
    /// Child index immediately after the last inserted node.
    pub end_offset: usize,
}

impl Insertion {
    /// Collapsed range immediately after the inserted content.
    pub fn range_after(&self) -> DomRange {
        DomRange::collapsed(self.parent, self.end_offset)
    }
}

/// Clamp `range` to the container's current extent.
///
/// Returns `None` when the container is no longer part of the tree.
pub fn clamp_range(root: &Node, range: DomRange) -> Option<DomRange> {
    let node = find_node(root, range.container)?;
    Some(match node {
        Node::Element { children, .. } => DomRange::new(
            range.container,
            range.start.min(children.len()),
            range.end.min(children.len()),
        ),
        Node::Text { text, .. } | Node::Comment { text, .. } => DomRange::new(
            range.container,
            clamp_to_char_boundary(text, range.start),
            clamp_to_char_boundary(text, range.end),
        ),
    })
}

/// Range covering the contents of `id`, optionally collapsed to its end.
pub fn select_node_contents(root: &Node, id: Id, collapse_to_end: bool) -> Option<DomRange> {
    let node = find_node(root, id)?;
    let range = DomRange::new(id, 0, node.boundary_len());
    Some(if collapse_to_end {
        range.collapse(true)
    } else {
        range
    })
}

/// Collapsed range immediately after `id` in its parent.
pub fn range_after_node(root: &Node, id: Id) -> Option<DomRange> {
    let (parent, index) = locate_parent(root, id)?;
    Some(DomRange::collapsed(parent, index + 1))
}

/// Remove the contents of `range` and insert `nodes` at its start.
///
/// Text containers are split at the start offset; the trailing half becomes a
/// new text node after the inserted content. Comment containers insert after
/// the comment. Returns `None` if the range no longer resolves, leaving the
/// tree untouched.
pub fn insert_at_range(
    root: &mut Node,
    range: DomRange,
    nodes: Vec<Node>,
    ids: &mut IdAllocator,
) -> Option<Insertion> {
    let range = clamp_range(root, range)?;
    let inserted: Vec<Id> = nodes.iter().map(Node::id).collect();
    let count = nodes.len();

    let is_element = find_node(root, range.container).is_some_and(|n| n.children().is_some());
    if is_element {
        let children = find_node_mut(root, range.container)?.children_mut()?;
        children.drain(range.start..range.end);
        children.splice(range.start..range.start, nodes);
        return Some(Insertion {
            parent: range.container,
            nodes: inserted,
            end_offset: range.start + count,
        });
    }

    let (parent, index) = locate_parent(root, range.container)?;
    let tail = match find_node_mut(root, range.container)? {
        Node::Text { text, .. } => {
            text.drain(range.start..range.end);
            text.split_off(range.start)
        }
        _ => String::new(),
    };

    let children = find_node_mut(root, parent)?.children_mut()?;
    let at = index + 1;
    children.splice(at..at, nodes);
    if !tail.is_empty() {
        children.insert(at + count, Node::text(ids.next_id(), tail));
    }

    Some(Insertion {
        parent,
        nodes: inserted,
        end_offset: at + count,
    })
}

/// Replace every child of `container` with `nodes`.
pub fn replace_children(root: &mut Node, container: Id, nodes: Vec<Node>) -> Option<Insertion> {
    let inserted: Vec<Id> = nodes.iter().map(Node::id).collect();
    let children = find_node_mut(root, container)?.children_mut()?;
    let count = nodes.len();
    *children = nodes;
    Some(Insertion {
        parent: container,
        nodes: inserted,
        end_offset: count,
    })
}

fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
