//! The editing surface an editor is bound to.

use crate::error::EditorError;
use html::dom_utils::{attr, is_content_editable};
use html::traverse::{find_node, text_content};
use html::{
    DomRange, Id, IdAllocator, Insertion, Node, clamp_range, inner_html, insert_at_range,
    parse_fragment, replace_children,
};
use input_core::TextField;

/// Zero-width space appended after inserted markup so the caret has a text
/// position outside the inserted element.
pub(crate) const CARET_ANCHOR: &str = "\u{200B}";

/// A contenteditable region: an element root plus the platform selection.
#[derive(Clone, Debug)]
pub struct RichRegion {
    root: Node,
    ids: IdAllocator,
    selection: Option<DomRange>,
    selection_api: bool,
    focused: bool,
}

impl RichRegion {
    /// Take ownership of `root`, giving every node a fresh id.
    pub fn new(mut root: Node) -> Self {
        let mut ids = IdAllocator::new();
        ids.reassign(&mut root);
        Self {
            root,
            ids,
            selection: None,
            selection_api: true,
            focused: false,
        }
    }

    /// A `<div contenteditable>` holding `markup`.
    pub fn from_markup(markup: &str) -> Self {
        let mut ids = IdAllocator::new();
        let mut root = Node::element(ids.next_id(), "div");
        if let Node::Element {
            attributes,
            children,
            ..
        } = &mut root
        {
            attributes.push(("contenteditable".to_string(), Some("true".to_string())));
            *children = parse_fragment(markup, &mut ids);
        }
        Self {
            root,
            ids,
            selection: None,
            selection_api: true,
            focused: false,
        }
    }

    /// Model a platform without `getSelection`.
    pub fn without_selection_api(mut self) -> Self {
        self.selection_api = false;
        self.selection = None;
        self
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_id(&self) -> Id {
        self.root.id()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn inner_html(&self) -> String {
        inner_html(&self.root)
    }

    pub fn text_content(&self) -> String {
        text_content(&self.root)
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        find_node(&self.root, id)
    }

    pub fn child_count(&self) -> usize {
        self.root.boundary_len()
    }

    /// The platform's active selection, if any.
    pub fn selection(&self) -> Option<DomRange> {
        self.selection
    }

    /// Make `range` the active selection.
    ///
    /// Returns `false` without a selection API.
    pub fn set_selection(&mut self, range: Option<DomRange>) -> bool {
        if !self.selection_api {
            return false;
        }
        self.selection = range;
        true
    }

    /// Collapsed range at the end of the root.
    pub fn end_range(&self) -> DomRange {
        DomRange::collapsed(self.root.id(), self.child_count())
    }

    /// Active selection if it still resolves, else the end of the root.
    pub(crate) fn insertion_point(&self) -> DomRange {
        self.selection
            .and_then(|range| clamp_range(&self.root, range))
            .unwrap_or_else(|| self.end_range())
    }

    /// Parse `markup` and insert it at `at`.
    pub(crate) fn insert_markup(
        &mut self,
        at: DomRange,
        markup: &str,
        anchor: bool,
    ) -> Result<Insertion, EditorError> {
        let mut nodes = parse_fragment(markup, &mut self.ids);
        if anchor {
            nodes.push(Node::text(self.ids.next_id(), CARET_ANCHOR));
        }
        self.insert_nodes(at, nodes)
    }

    /// Insert a single text node at `at` and return its id.
    pub(crate) fn insert_text(&mut self, at: DomRange, text: &str) -> Result<Id, EditorError> {
        let id = self.ids.next_id();
        self.insert_nodes(at, vec![Node::text(id, text)])?;
        Ok(id)
    }

    fn insert_nodes(&mut self, at: DomRange, nodes: Vec<Node>) -> Result<Insertion, EditorError> {
        insert_at_range(&mut self.root, at, nodes, &mut self.ids)
            .ok_or(EditorError::invalid("insert", "insertion point is not in the surface"))
    }

    /// Replace all content with parsed `markup`.
    pub(crate) fn replace_all(&mut self, markup: &str, anchor: bool) -> Insertion {
        let root_id = self.root.id();
        let mut nodes = parse_fragment(markup, &mut self.ids);
        if anchor {
            nodes.push(Node::text(self.ids.next_id(), CARET_ANCHOR));
        }
        let count = nodes.len();
        replace_children(&mut self.root, root_id, nodes).unwrap_or(Insertion {
            parent: root_id,
            nodes: Vec::new(),
            end_offset: count,
        })
    }

    /// Host-side edit: replace the content as if the page set `innerHTML`.
    pub fn set_inner_html(&mut self, markup: &str) {
        self.replace_all(markup, false);
    }

    /// Host-side edit: type `text` at the active selection (or the end), leaving
    /// the selection collapsed after it.
    pub fn type_text(&mut self, text: &str) -> Option<Id> {
        let at = self.insertion_point();
        let id = self.insert_text(at, text).ok()?;
        let len = self.node(id).map_or(0, Node::boundary_len);
        self.set_selection(Some(DomRange::collapsed(id, len)));
        Some(id)
    }
}

/// The surface bound to an editor.
#[derive(Clone, Debug)]
pub enum EditableTarget {
    Rich(RichRegion),
    Plain(TextField),
}

impl EditableTarget {
    /// Classify a host element.
    ///
    /// `input` and `textarea` are plain fields even when marked
    /// contenteditable; other elements must be contenteditable.
    pub fn from_element(node: Node) -> Result<Self, EditorError> {
        if node.is_element_named("input") {
            let value = attr(&node, "value").unwrap_or("");
            return Ok(EditableTarget::Plain(TextField::single_line(value)));
        }
        if node.is_element_named("textarea") {
            return Ok(EditableTarget::Plain(TextField::multi_line(text_content(&node))));
        }
        if is_content_editable(&node) {
            return Ok(EditableTarget::Rich(RichRegion::new(node)));
        }
        Err(EditorError::invalid(
            "bind",
            "element is neither a text control nor contenteditable",
        ))
    }

    /// Parse `markup` and classify its first element.
    pub fn parse(markup: &str) -> Result<Self, EditorError> {
        let node = parse_fragment(markup, &mut IdAllocator::new())
            .into_iter()
            .find(|n| n.name().is_some())
            .ok_or(EditorError::invalid("bind", "markup contains no element"))?;
        Self::from_element(node)
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, EditableTarget::Rich(_))
    }

    pub fn focus(&mut self) {
        match self {
            EditableTarget::Rich(region) => region.focus(),
            EditableTarget::Plain(field) => field.focus(),
        }
    }

    pub fn as_rich(&self) -> Option<&RichRegion> {
        match self {
            EditableTarget::Rich(region) => Some(region),
            EditableTarget::Plain(_) => None,
        }
    }

    pub fn as_rich_mut(&mut self) -> Option<&mut RichRegion> {
        match self {
            EditableTarget::Rich(region) => Some(region),
            EditableTarget::Plain(_) => None,
        }
    }

    pub fn as_plain(&self) -> Option<&TextField> {
        match self {
            EditableTarget::Plain(field) => Some(field),
            EditableTarget::Rich(_) => None,
        }
    }

    pub fn as_plain_mut(&mut self) -> Option<&mut TextField> {
        match self {
            EditableTarget::Plain(field) => Some(field),
            EditableTarget::Rich(_) => None,
        }
    }
}

impl From<RichRegion> for EditableTarget {
    fn from(region: RichRegion) -> Self {
        EditableTarget::Rich(region)
    }
}

impl From<TextField> for EditableTarget {
    fn from(field: TextField) -> Self {
        EditableTarget::Plain(field)
    }
}
