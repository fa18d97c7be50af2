//! Action types and the synchronous dispatcher.
//!
//! Control flow in this crate is a small publish/subscribe chain:
//! something dispatches an action, the dispatcher delivers it to every
//! listener registered for that action kind, and listeners may publish
//! follow-up actions through an [`Outbox`]. Each action runs to
//! completion before the next queued action is delivered, so listeners
//! never observe a half-processed chain.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::preferences::Preferences;

/// Actions flowing through the preference sync chain
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Ask for the current preferences (no payload)
    PreferencesRequest,
    /// Preferences were produced, either by the backend or from state
    PreferencesSuccess(Preferences),
}

impl Action {
    /// Discriminator used for listener routing and logging
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::PreferencesRequest => ActionKind::PreferencesRequest,
            Action::PreferencesSuccess(_) => ActionKind::PreferencesSuccess,
        }
    }
}

/// The kind of an [`Action`], without its payload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    PreferencesRequest,
    PreferencesSuccess,
}

impl ActionKind {
    /// Machine-friendly name for log output
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::PreferencesRequest => "preferences_request",
            ActionKind::PreferencesSuccess => "preferences_success",
        }
    }
}

/// Collector for follow-up actions published by a listener.
///
/// Actions placed here are appended to the dispatcher queue once every
/// listener of the current action has run.
#[derive(Debug, Default)]
pub struct Outbox {
    actions: VecDeque<Action>,
}

impl Outbox {
    /// Publish a follow-up action
    pub fn put(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    fn drain(&mut self) -> impl Iterator<Item = Action> + '_ {
        self.actions.drain(..)
    }
}

/// A listener callback. Errors abort the current drain and surface to
/// the caller of [`Dispatcher::run_until_idle`].
pub type Handler<E> = Box<dyn FnMut(&Action, &mut Outbox) -> Result<(), E>>;

struct ListenerEntry<E> {
    kind: ActionKind,
    name: &'static str,
    handler: Handler<E>,
}

/// Ordered registry of named listeners plus a FIFO action queue.
///
/// Listeners are delivered actions in registration order. Registration
/// is keyed by `(kind, name)`: subscribing the same pair twice is
/// rejected, so running setup code more than once cannot stack
/// duplicate listeners.
pub struct Dispatcher<E> {
    listeners: Vec<ListenerEntry<E>>,
    queue: VecDeque<Action>,
}

impl<E> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Dispatcher<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Register a named listener for one action kind.
    ///
    /// Returns `false` (and leaves the registry untouched) when a
    /// listener with the same name is already registered for that kind.
    pub fn subscribe(&mut self, kind: ActionKind, name: &'static str, handler: Handler<E>) -> bool {
        if self
            .listeners
            .iter()
            .any(|entry| entry.kind == kind && entry.name == name)
        {
            warn!(
                "listener '{}' already registered for {}; ignoring",
                name,
                kind.as_str()
            );
            return false;
        }

        debug!("registered listener '{}' for {}", name, kind.as_str());
        self.listeners.push(ListenerEntry {
            kind,
            name,
            handler,
        });
        true
    }

    /// Number of listeners registered for the given kind
    pub fn listener_count(&self, kind: ActionKind) -> usize {
        self.listeners
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }

    /// Enqueue an action for delivery
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatching {}", action.kind().as_str());
        self.queue.push_back(action);
    }

    /// Number of actions waiting in the queue
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drain the queue, delivering each action to its listeners.
    ///
    /// Follow-up actions published while handling an action are
    /// appended to the queue and processed after the current action
    /// completes. The first listener error aborts the drain; actions
    /// still queued at that point stay queued.
    pub fn run_until_idle(&mut self) -> Result<(), E> {
        while let Some(action) = self.queue.pop_front() {
            let kind = action.kind();
            let mut outbox = Outbox::default();

            for entry in self.listeners.iter_mut().filter(|e| e.kind == kind) {
                (entry.handler)(&action, &mut outbox)?;
            }

            self.queue.extend(outbox.drain());
        }
        Ok(())
    }
}
