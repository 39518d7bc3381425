//! Public event object combining the tree, stop state and dispatcher

use super::dispatch::{Dispatcher, Emission, StopState};
use super::handler::{Handler, Hook};
use super::path::parse_segments;
use super::tree::EventTree;
use crate::errors::Result;
use crate::settings::Settings;
use parking_lot::Mutex;
use tracing::{debug, span, trace, Level};

/// Hierarchical publish/subscribe bus.
///
/// Event names are separator-delimited paths (`"mouse:click"`). Emitting a
/// path notifies the handlers connected at every node from the root segment
/// down to the leaf, in that order.
///
/// All operations take `&self`; the object can be shared behind an `Arc` and
/// used re-entrantly from its own handlers and hooks.
///
/// ```
/// use evtree_core::events::{EventObject, Handler};
///
/// let events: EventObject<i64, i64> = EventObject::new();
/// let double = Handler::new(|_event: &str, n: &i64| n * 2);
/// events.connect("calc", &double).unwrap();
///
/// let mut total = 0;
/// events.emit_with_accumulator("calc", |r| total += r, &21).unwrap();
/// assert_eq!(total, 42);
/// ```
pub struct EventObject<A = serde_json::Value, R = serde_json::Value> {
    settings: Settings,
    tree: Mutex<EventTree<A, R>>,
    stop: StopState,
}

impl<A, R> Default for EventObject<A, R> {
    fn default() -> Self {
        Self::from_valid_settings(Settings::default())
    }
}

impl<A, R> EventObject<A, R> {
    /// Create an event object with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an event object with custom settings
    pub fn with_settings(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::from_valid_settings(settings))
    }

    pub(crate) fn from_valid_settings(settings: Settings) -> Self {
        Self {
            settings,
            tree: Mutex::new(EventTree::new()),
            stop: StopState::new(settings.stop_scope),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn segments<'n>(&self, event: &'n str) -> Result<Vec<&'n str>> {
        parse_segments(event, self.settings.separator)
    }

    /// Connect `handler` at `event`, creating the path if needed
    pub fn connect(&self, event: &str, handler: &Handler<A, R>) -> Result<()> {
        let segments = self.segments(event)?;
        if let Some(node) = self.tree.lock().resolve(&segments) {
            node.connect(handler);
        }
        debug!(event = %event, handler = ?handler, "handler connected");
        Ok(())
    }

    /// Disconnect every entry of `handler` at `event`. Unknown paths are
    /// ignored.
    pub fn disconnect(&self, event: &str, handler: &Handler<A, R>) -> Result<()> {
        let segments = self.segments(event)?;
        let removed = self
            .tree
            .lock()
            .lookup_mut(&segments)
            .map_or(0, |node| node.disconnect(handler));
        debug!(event = %event, handler = ?handler, removed, "handler disconnected");
        Ok(())
    }

    /// Block `handler` at `event`. Blocks nest: each call needs a matching
    /// [`unblock`](Self::unblock).
    pub fn block(&self, event: &str, handler: &Handler<A, R>) -> Result<()> {
        let segments = self.segments(event)?;
        let blocked = self
            .tree
            .lock()
            .lookup_mut(&segments)
            .is_some_and(|node| node.block(handler));
        trace!(event = %event, handler = ?handler, blocked, "block");
        Ok(())
    }

    /// Undo one [`block`](Self::block). Extra calls are ignored.
    pub fn unblock(&self, event: &str, handler: &Handler<A, R>) -> Result<()> {
        let segments = self.segments(event)?;
        let unblocked = self
            .tree
            .lock()
            .lookup_mut(&segments)
            .is_some_and(|node| node.unblock(handler));
        trace!(event = %event, handler = ?handler, unblocked, "unblock");
        Ok(())
    }

    /// Emit `event`, discarding handler return values
    pub fn emit(&self, event: &str, args: &A) -> Result<Emission> {
        self.emit_with_accumulator(event, |_| {}, args)
    }

    /// Emit `event`, feeding every invoked handler's return value to
    /// `accumulator` in invocation order
    pub fn emit_with_accumulator<F>(
        &self,
        event: &str,
        accumulator: F,
        args: &A,
    ) -> Result<Emission>
    where
        F: FnMut(R),
    {
        let segments = self.segments(event)?;
        let span = span!(Level::DEBUG, "emit", event = %event);
        let _enter = span.enter();

        let emission =
            Dispatcher::new(&self.tree, &self.stop).dispatch(event, &segments, args, accumulator);
        debug!(
            event = %event,
            handlers_invoked = emission.handlers_invoked,
            stopped = emission.stopped,
            "event emitted"
        );
        Ok(emission)
    }

    /// Add a hook run before the handler phase of every emission passing
    /// through `event`. Pre-hooks run root first, in the order added.
    pub fn add_pre_hook(&self, event: &str, hook: &Hook) -> Result<()> {
        let segments = self.segments(event)?;
        if let Some(node) = self.tree.lock().resolve(&segments) {
            node.add_pre_hook(hook);
        }
        debug!(event = %event, hook = ?hook, "pre-hook added");
        Ok(())
    }

    pub fn remove_pre_hook(&self, event: &str, hook: &Hook) -> Result<()> {
        let segments = self.segments(event)?;
        let removed = self
            .tree
            .lock()
            .lookup_mut(&segments)
            .map_or(0, |node| node.remove_pre_hook(hook));
        debug!(event = %event, hook = ?hook, removed, "pre-hook removed");
        Ok(())
    }

    /// Add a hook run after the handler phase, even when it was stopped.
    /// Post-hooks run leaf first; within a node the latest added runs first.
    pub fn add_post_hook(&self, event: &str, hook: &Hook) -> Result<()> {
        let segments = self.segments(event)?;
        if let Some(node) = self.tree.lock().resolve(&segments) {
            node.add_post_hook(hook);
        }
        debug!(event = %event, hook = ?hook, "post-hook added");
        Ok(())
    }

    pub fn remove_post_hook(&self, event: &str, hook: &Hook) -> Result<()> {
        let segments = self.segments(event)?;
        let removed = self
            .tree
            .lock()
            .lookup_mut(&segments)
            .map_or(0, |node| node.remove_post_hook(hook));
        debug!(event = %event, hook = ?hook, removed, "post-hook removed");
        Ok(())
    }

    /// Stop the handler phase of the running emission. Handlers not yet
    /// reached are skipped; post-hooks still run. Outside an emission this
    /// does nothing useful.
    pub fn stop(&self) {
        let active = self.stop.stop();
        trace!(active, "stop requested");
    }

    /// Discard every node, handler, hook and block count
    pub fn clear(&self) {
        self.tree.lock().clear();
        debug!("event tree cleared");
    }

    /// Discard the node at `event` and all of its descendants
    pub fn clear_event(&self, event: &str) -> Result<()> {
        let segments = self.segments(event)?;
        let removed = self.tree.lock().remove_subtree(&segments);
        debug!(
            event = %event,
            nodes_removed = removed.as_ref().map_or(0, |node| node.subtree_len()),
            "event subtree cleared"
        );
        Ok(())
    }

    /// Whether a node exists for `event`. Never creates one.
    pub fn contains(&self, event: &str) -> Result<bool> {
        let segments = self.segments(event)?;
        Ok(self.tree.lock().lookup(&segments).is_some())
    }

    /// Number of handler entries connected exactly at `event`
    pub fn handler_count(&self, event: &str) -> Result<usize> {
        let segments = self.segments(event)?;
        Ok(self
            .tree
            .lock()
            .lookup(&segments)
            .map_or(0, |node| node.handler_count()))
    }

    /// Whether `handler` is connected at `event` with a nonzero block count
    pub fn is_blocked(&self, event: &str, handler: &Handler<A, R>) -> Result<bool> {
        let segments = self.segments(event)?;
        Ok(self
            .tree
            .lock()
            .lookup(&segments)
            .and_then(|node| node.block_count(handler))
            .is_some_and(|count| count > 0))
    }

    /// Total number of materialised nodes
    pub fn node_count(&self) -> usize {
        self.tree.lock().node_count()
    }
}
