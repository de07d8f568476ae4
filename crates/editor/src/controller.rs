//! The editor bound to one surface.

use crate::caret::{CaretState, SelectionPort};
use crate::config::{EditorConfig, OutputMode};
use crate::content::{extract_html, extract_text};
use crate::environment::{Environment, StaticEnvironment};
use crate::error::EditorError;
use crate::events::{
    ChangeNotifier, Clipboard, EventKind, EventOutcome, Key, SubscriptionId, Subscriptions,
    SurfaceChange, SurfaceEvent,
};
use crate::target::{CARET_ANCHOR, EditableTarget};
use emoji_codec::{decode_token, render_character, render_markup};
use html::{DomRange, Id, Node, select_node_contents};
use input_core::{SelectionRange, TextControl};
use std::sync::mpsc::Receiver;

/// Content ready to be inserted at the caret.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreparedInsertion {
    /// Markup for rich surfaces, plain text for plain fields.
    pub content: String,
    /// Native glyph, inserted instead of `content` on rich surfaces when the
    /// environment renders combined glyphs.
    pub character: Option<String>,
}

impl PreparedInsertion {
    pub fn markup(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            character: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::markup(content)
    }

    pub fn with_character(mut self, character: impl Into<String>) -> Self {
        self.character = Some(character.into());
        self
    }
}

/// What an insertion produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertedHandle {
    /// Top-level nodes added to a rich surface, in order.
    Nodes(Vec<Id>),
    /// Range of a plain field's value now holding `text`.
    Text { range: SelectionRange, text: String },
}

/// Inserts emoji into one editable surface and serializes it back.
///
/// The editor owns its target. Hosts forward pointer, key and paste events
/// through [`dispatch`](Self::dispatch) and read results with
/// [`get_text`](Self::get_text) / [`get_html`](Self::get_html).
#[derive(Debug)]
pub struct EmojiEditor<E = StaticEnvironment> {
    target: EditableTarget,
    config: EditorConfig,
    env: E,
    port: SelectionPort,
    caret: Option<CaretState>,
    subscriptions: Subscriptions,
    notifier: ChangeNotifier,
}

impl<E: Environment> EmojiEditor<E> {
    /// Bind to `target`. Caret tracking is subscribed for every surface; paste
    /// interception and the newline guard only for rich ones.
    pub fn bind(target: EditableTarget, config: EditorConfig, env: E) -> Self {
        let port = SelectionPort::for_target(&target);
        let mut subscriptions = Subscriptions::default();
        subscriptions.subscribe(EventKind::CaretTracking);
        if target.is_rich() {
            subscriptions.subscribe(EventKind::NewlineGuard);
            subscriptions.subscribe(EventKind::Paste);
        }
        log::debug!(
            target: "editor.caret",
            "bound {:?} surface, output {}",
            port,
            config.output_mode
        );
        Self {
            target,
            config,
            env,
            port,
            caret: None,
            subscriptions,
            notifier: ChangeNotifier::default(),
        }
    }

    pub fn target(&self) -> &EditableTarget {
        &self.target
    }

    /// Host-side access for edits the editor does not make itself, such as
    /// typing or moving the selection.
    pub fn target_mut(&mut self) -> &mut EditableTarget {
        &mut self.target
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn is_rich(&self) -> bool {
        self.target.is_rich()
    }

    pub fn selection_port(&self) -> SelectionPort {
        self.port
    }

    /// Last captured caret.
    pub fn caret(&self) -> Option<CaretState> {
        self.caret
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// Subscribe to `kind`, replacing any earlier subscription of that kind.
    pub fn subscribe(&mut self, kind: EventKind) -> Result<SubscriptionId, EditorError> {
        if kind != EventKind::CaretTracking && !self.target.is_rich() {
            return Err(EditorError::invalid(
                "subscribe",
                "paste and newline handling apply to rich surfaces only",
            ));
        }
        Ok(self.subscriptions.subscribe(kind))
    }

    /// Returns `false` if `kind` had no subscription.
    pub fn unsubscribe(&mut self, kind: EventKind) -> bool {
        self.subscriptions.unsubscribe(kind).is_some()
    }

    /// Drop every subscription; later events are ignored.
    pub fn unbind(&mut self) {
        self.subscriptions.clear();
        log::debug!(target: "editor.caret", "unbound");
    }

    /// Register a change observer.
    pub fn changes(&mut self) -> Receiver<SurfaceChange> {
        self.notifier.register()
    }

    /// Handle a host event. Events without an active subscription are ignored.
    pub fn dispatch(&mut self, event: SurfaceEvent) -> EventOutcome {
        if !self.subscriptions.is_active(event.kind()) {
            return EventOutcome::IGNORED;
        }
        match event {
            SurfaceEvent::PointerUp | SurfaceEvent::KeyUp => {
                self.capture_caret();
                EventOutcome::IGNORED
            }
            SurfaceEvent::KeyDown(Key::Enter) if self.config.prevent_newline => {
                log::trace!(target: "editor.caret", "newline suppressed");
                EventOutcome::prevent_default()
            }
            SurfaceEvent::KeyDown(_) => EventOutcome::IGNORED,
            SurfaceEvent::Paste(clipboard) => self.paste(&clipboard),
        }
    }

    /// Build the insertion for `token` on this surface: image markup plus the
    /// native glyph for rich surfaces, the glyph alone for plain fields.
    pub fn prepare(&self, token: &str) -> Result<PreparedInsertion, EditorError> {
        let token = decode_token(token)?;
        let character = render_character(&token);
        Ok(if self.target.is_rich() {
            PreparedInsertion::markup(render_markup(&token, &self.config.markup))
                .with_character(character)
        } else {
            PreparedInsertion::text(character)
        })
    }

    /// Decode `token` and insert it at the caret.
    pub fn insert_emoji(&mut self, token: &str) -> Result<InsertedHandle, EditorError> {
        let insertion = self.prepare(token)?;
        self.insert_token(insertion)
    }

    /// Insert at the stored caret and move the caret after the insertion.
    ///
    /// Without a usable caret the content is appended at the end.
    pub fn insert_token(&mut self, insertion: PreparedInsertion) -> Result<InsertedHandle, EditorError> {
        self.target.focus();
        if let Some(caret) = self.caret {
            if let Err(err) = self.port.restore(&mut self.target, caret) {
                log::debug!(target: "editor.caret", "stored caret not restored: {err}");
            }
        }

        let (handle, next) = match &mut self.target {
            EditableTarget::Rich(region) => {
                let at = region.insertion_point();
                let native = self.env.supports_native_combined_glyphs();
                match insertion.character.as_deref().filter(|_| native) {
                    Some(character) => {
                        let id = region.insert_text(at, character)?;
                        let len = region.node(id).map_or(0, Node::boundary_len);
                        (
                            InsertedHandle::Nodes(vec![id]),
                            CaretState::Range(DomRange::collapsed(id, len)),
                        )
                    }
                    None => {
                        let inserted = region.insert_markup(at, &insertion.content, true)?;
                        let after = inserted.range_after();
                        (InsertedHandle::Nodes(inserted.nodes), CaretState::Range(after))
                    }
                }
            }
            EditableTarget::Plain(field) => {
                let stored = match self.caret {
                    Some(CaretState::Offset(offset)) => Some(offset),
                    _ => None,
                };
                let (range, caret) = splice_at_caret(field, stored, &insertion.content);
                let text = range.slice(field.value()).unwrap_or_default().to_string();
                (InsertedHandle::Text { range, text }, CaretState::Offset(caret))
            }
        };

        if let Err(err) = self.port.restore(&mut self.target, next) {
            log::debug!(target: "editor.caret", "caret not moved after insertion: {err}");
        }
        self.caret = Some(next);
        log::trace!(target: "editor.insert", "inserted {handle:?}, caret now {next:?}");
        self.notifier.notify();
        Ok(handle)
    }

    /// Plain text of the surface.
    ///
    /// Plain fields go through the environment's shortcode replacement; rich
    /// surfaces are walked and emoji markers decoded.
    pub fn get_text(&self) -> String {
        match &self.target {
            EditableTarget::Rich(region) => extract_text(region.root()),
            EditableTarget::Plain(field) => self.env.replace_colons(field.value()),
        }
    }

    /// Normalized markup of the surface in the configured output mode.
    pub fn get_html(&self) -> String {
        match (&self.target, self.config.output_mode) {
            (EditableTarget::Rich(region), OutputMode::RawMarkup) => region.inner_html(),
            (EditableTarget::Rich(region), OutputMode::Encode(mode)) => {
                extract_html(region.root(), mode, &self.config.markup)
            }
            (EditableTarget::Plain(field), _) => self.env.replace_colons(field.value()),
        }
    }

    /// Put the caret at the end of the surface's content and capture it.
    /// No-op when the surface is empty.
    ///
    /// The caret only descends into a trailing text node; after an element
    /// (markers included) it sits in the root, past the last child.
    pub fn select_last_node(&mut self) {
        let caret = match &self.target {
            EditableTarget::Rich(region) => {
                let root = region.root();
                root.children()
                    .and_then(<[Node]>::last)
                    .and_then(|last| match last {
                        Node::Text { .. } => select_node_contents(root, last.id(), true),
                        _ => Some(DomRange::collapsed(root.id(), region.child_count())),
                    })
                    .map(CaretState::Range)
            }
            EditableTarget::Plain(field) => {
                let len = field.value().len();
                (len > 0).then_some(CaretState::Offset(len))
            }
        };
        if let Some(caret) = caret {
            self.caret = self.port.place(&mut self.target, caret);
        }
    }

    /// Re-render the rich surface through the environment's unified
    /// conversion and put the caret after the replaced content.
    pub fn replace_unified_representation(&mut self) -> Result<(), EditorError> {
        let Some(region) = self.target.as_rich_mut() else {
            return Err(EditorError::invalid(
                "replace_unified_representation",
                "surface is a plain text field",
            ));
        };
        let converted = self
            .env
            .replace_unified(&region.inner_html(), &self.config.markup);
        let inserted = region.replace_all(&converted.replace(CARET_ANCHOR, ""), true);
        let caret = CaretState::Range(inserted.range_after());
        self.caret = self.port.place(&mut self.target, caret);
        self.notifier.notify();
        Ok(())
    }

    /// Clear the surface. The stored caret is left as is.
    pub fn empty(&mut self) {
        match &mut self.target {
            EditableTarget::Rich(region) => region.set_inner_html(""),
            EditableTarget::Plain(field) => field.clear(),
        }
        log::trace!(target: "editor.insert", "surface emptied");
        self.notifier.notify();
    }

    fn capture_caret(&mut self) {
        self.caret = self.port.capture(&self.target);
        log::trace!(target: "editor.caret", "captured {:?}", self.caret);
    }

    /// Insert only the clipboard's plain text and select it.
    fn paste(&mut self, clipboard: &Clipboard) -> EventOutcome {
        let outcome = EventOutcome::prevent_default().stop_propagation();
        if clipboard.html.is_some() {
            log::trace!(target: "editor.paste", "discarding rich clipboard payload");
        }
        let text = clipboard.text.as_deref().unwrap_or_default();
        let Some(region) = self.target.as_rich_mut() else {
            return outcome;
        };
        if text.is_empty() {
            return outcome;
        }
        let at = region.insertion_point();
        let caret = match region.insert_text(at, text) {
            Ok(id) => {
                let len = region.node(id).map_or(0, Node::boundary_len);
                CaretState::Range(DomRange::collapsed(id, len))
            }
            Err(err) => {
                log::debug!(target: "editor.paste", "paste dropped: {err}");
                return outcome;
            }
        };
        self.caret = self.port.place(&mut self.target, caret);
        log::trace!(target: "editor.paste", "pasted {} bytes", text.len());
        self.notifier.notify();
        outcome
    }
}

/// Splice `text` at the stored offset, falling back to the control's selection
/// start and then to the end. Returns the inserted range and the caret offset
/// advanced by the length the value grew.
fn splice_at_caret<C: TextControl>(
    control: &mut C,
    stored: Option<usize>,
    text: &str,
) -> (SelectionRange, usize) {
    let at = stored
        .or_else(|| control.selection_start())
        .unwrap_or(control.value().len());
    let before = control.value().len();
    let range = control.splice(at, text);
    let delta = control.value().len() - before;
    (range, range.start + delta)
}
