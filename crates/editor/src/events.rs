//! Host events, subscriptions and change notifications.

use std::sync::mpsc::{Receiver, Sender, channel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Character(char),
}

/// Clipboard payloads offered with a paste.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clipboard {
    pub text: Option<String>,
    pub html: Option<String>,
}

impl Clipboard {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            html: None,
        }
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }
}

/// An event delivered by the host to the bound surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    PointerUp,
    KeyUp,
    KeyDown(Key),
    Paste(Clipboard),
}

impl SurfaceEvent {
    /// The subscription that handles this event.
    pub fn kind(&self) -> EventKind {
        match self {
            SurfaceEvent::PointerUp | SurfaceEvent::KeyUp => EventKind::CaretTracking,
            SurfaceEvent::KeyDown(_) => EventKind::NewlineGuard,
            SurfaceEvent::Paste(_) => EventKind::Paste,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer-up and key-up snapshot the caret.
    CaretTracking,
    /// Key-down of Enter is suppressed when newlines are prevented.
    NewlineGuard,
    /// Paste is intercepted and reduced to plain text.
    Paste,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [
        EventKind::CaretTracking,
        EventKind::NewlineGuard,
        EventKind::Paste,
    ];

    fn slot(self) -> usize {
        match self {
            EventKind::CaretTracking => 0,
            EventKind::NewlineGuard => 1,
            EventKind::Paste => 2,
        }
    }
}

/// What the handler did with an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl EventOutcome {
    pub const IGNORED: EventOutcome = EventOutcome {
        default_prevented: false,
        propagation_stopped: false,
    };

    pub fn prevent_default() -> Self {
        Self {
            default_prevented: true,
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(mut self) -> Self {
        self.propagation_stopped = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// At most one live subscription per [`EventKind`].
#[derive(Clone, Debug, Default)]
pub struct Subscriptions {
    slots: [Option<SubscriptionId>; 3],
    next: u64,
}

impl Subscriptions {
    /// Subscribe to `kind`, replacing any prior subscription.
    pub fn subscribe(&mut self, kind: EventKind) -> SubscriptionId {
        self.next += 1;
        let id = SubscriptionId(self.next);
        if let Some(prev) = self.slots[kind.slot()].replace(id) {
            log::trace!(target: "editor.events", "{kind:?}: {prev:?} replaced by {id:?}");
        }
        id
    }

    /// Returns the removed subscription, if there was one.
    pub fn unsubscribe(&mut self, kind: EventKind) -> Option<SubscriptionId> {
        self.slots[kind.slot()].take()
    }

    pub fn clear(&mut self) {
        self.slots = [None; 3];
    }

    pub fn is_active(&self, kind: EventKind) -> bool {
        self.slots[kind.slot()].is_some()
    }

    pub fn active(&self, kind: EventKind) -> Option<SubscriptionId> {
        self.slots[kind.slot()]
    }
}

/// Payload-free content change notifications, sent as a `Change`, `Input` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceChange {
    Change,
    Input,
}

#[derive(Debug, Default)]
pub(crate) struct ChangeNotifier {
    observers: Vec<Sender<SurfaceChange>>,
}

impl ChangeNotifier {
    pub(crate) fn register(&mut self) -> Receiver<SurfaceChange> {
        let (tx, rx) = channel();
        self.observers.push(tx);
        rx
    }

    /// Notify every observer, dropping those whose receiver is gone.
    pub(crate) fn notify(&mut self) {
        self.observers.retain(|tx| {
            tx.send(SurfaceChange::Change).is_ok() && tx.send(SurfaceChange::Input).is_ok()
        });
        log::trace!(target: "editor.events", "change sent to {} observers", self.observers.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_map_to_kinds() {
        assert_eq!(SurfaceEvent::PointerUp.kind(), EventKind::CaretTracking);
        assert_eq!(SurfaceEvent::KeyUp.kind(), EventKind::CaretTracking);
        assert_eq!(SurfaceEvent::KeyDown(Key::Enter).kind(), EventKind::NewlineGuard);
        assert_eq!(SurfaceEvent::Paste(Clipboard::default()).kind(), EventKind::Paste);
    }

    #[test]
    fn resubscribing_replaces() {
        let mut subs = Subscriptions::default();
        let first = subs.subscribe(EventKind::Paste);
        let second = subs.subscribe(EventKind::Paste);
        assert_ne!(first, second);
        assert_eq!(subs.active(EventKind::Paste), Some(second));
        assert_eq!(subs.unsubscribe(EventKind::Paste), Some(second));
        assert!(!subs.is_active(EventKind::Paste));
        assert_eq!(subs.unsubscribe(EventKind::Paste), None);
    }

    #[test]
    fn clear_drops_everything() {
        let mut subs = Subscriptions::default();
        for kind in EventKind::ALL {
            subs.subscribe(kind);
        }
        subs.clear();
        assert!(EventKind::ALL.iter().all(|k| !subs.is_active(*k)));
    }

    #[test]
    fn notifier_sends_pairs_and_prunes() {
        let mut notifier = ChangeNotifier::default();
        let kept = notifier.register();
        drop(notifier.register());
        notifier.notify();
        assert_eq!(notifier.observers.len(), 1);
        assert_eq!(kept.try_iter().collect::<Vec<_>>(), vec![SurfaceChange::Change, SurfaceChange::Input]);
    }

    #[test]
    fn outcome_builders() {
        let outcome = EventOutcome::prevent_default().stop_propagation();
        assert!(outcome.default_prevented && outcome.propagation_stopped);
        assert_eq!(EventOutcome::default(), EventOutcome::IGNORED);
    }
}
