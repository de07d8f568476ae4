use crate::{Id, Node};

/// Hands out node ids for one tree. `Id(0)` is never produced.
#[derive(Clone, Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> Id {
        let id = Id(self.next);
        self.next = self.next.wrapping_add(1).max(1);
        id
    }

    /// Give every node in `node` a fresh id.
    pub fn reassign(&mut self, node: &mut Node) {
        node.set_id(self.next_id());
        if let Some(children) = node.children_mut() {
            for c in children {
                self.reassign(c);
            }
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order visit of `node` and its descendants.
pub fn for_each_node<'a>(node: &'a Node, f: &mut impl FnMut(&'a Node)) {
    f(node);
    if let Some(children) = node.children() {
        for c in children {
            for_each_node(c, f);
        }
    }
}

pub fn find_node(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()?.iter().find_map(|c| find_node(c, id))
}

pub fn find_node_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|c| find_node_mut(c, id))
}

/// Parent id and child index of `target` below `root`.
pub fn locate_parent(root: &Node, target: Id) -> Option<(Id, usize)> {
    let children = root.children()?;
    for (i, c) in children.iter().enumerate() {
        if c.id() == target {
            return Some((root.id(), i));
        }
        if let Some(found) = locate_parent(c, target) {
            return Some(found);
        }
    }
    None
}

/// Concatenated text of all descendant text nodes.
pub fn text_content(node: &Node) -> String {
    let mut out = String::new();
    for_each_node(node, &mut |n| {
        if let Node::Text { text, .. } = n {
            out.push_str(text);
        }
    });
    out
}
