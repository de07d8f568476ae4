pub type NodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    StartTag {
        name: String,
        attributes: Vec<(String, Option<String>)>,
        self_closing: bool,
    },
    EndTag(String),
    Comment(String),
    Text(String),
}

/// A node of an editable region.
///
/// Element names and attribute names are ASCII-lowercased by the tokenizer;
/// text is stored decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element {
        id: Id,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
    Comment {
        id: Id,
        text: String,
    },
}

impl Node {
    pub fn element(id: Id, name: &str) -> Self {
        Node::Element {
            id,
            name: name.to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(id: Id, text: impl Into<String>) -> Self {
        Node::Text {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> Id {
        match self {
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
            Node::Comment { id, .. } => *id,
        }
    }

    pub fn set_id(&mut self, new_id: Id) {
        match self {
            Node::Element { id, .. } => *id = new_id,
            Node::Text { id, .. } => *id = new_id,
            Node::Comment { id, .. } => *id = new_id,
        }
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Element name, if this is an element.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_element_named(&self, expected: &str) -> bool {
        self.name().is_some_and(|n| n.eq_ignore_ascii_case(expected))
    }

    /// Boundary count used by ranges: children for elements, bytes for text.
    pub fn boundary_len(&self) -> usize {
        match self {
            Node::Element { children, .. } => children.len(),
            Node::Text { text, .. } | Node::Comment { text, .. } => text.len(),
        }
    }
}
