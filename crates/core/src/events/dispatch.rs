//! Emission orchestration: pre-hooks, handlers, post-hooks
//!
//! The tree lock is only held while snapshotting the node chain and while
//! reading a single block count. User callbacks always run unlocked, so they
//! may connect, block, emit or clear on the same event object.

use super::handler::Handler;
use super::node::NodeSnapshot;
use super::tree::EventTree;
use crate::settings::StopScope;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use tracing::trace;

/// Outcome of one emission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emission {
    /// Handlers actually invoked (blocked handlers are not counted)
    pub handlers_invoked: usize,
    /// The handler phase was cut short by `stop()`
    pub stopped: bool,
}

/// Stop flags for the emissions running on one event object.
///
/// In `StopScope::Emission` every thread has its own stack of flags, so a
/// `stop()` only reaches the innermost emission of the calling thread.
pub(crate) struct StopState {
    scope: StopScope,
    shared: Arc<AtomicBool>,
    frames: Mutex<HashMap<ThreadId, Vec<Arc<AtomicBool>>>>,
}

impl StopState {
    pub fn new(scope: StopScope) -> Self {
        Self {
            scope,
            shared: Arc::new(AtomicBool::new(false)),
            frames: Mutex::new(HashMap::new()),
        }
    }

    /// Start an emission and return the flag its handler phase polls
    pub fn begin(&self) -> StopFrame<'_> {
        let flag = match self.scope {
            StopScope::Shared => {
                self.shared.store(false, Ordering::SeqCst);
                Arc::clone(&self.shared)
            }
            StopScope::Emission => {
                let flag = Arc::new(AtomicBool::new(false));
                self.frames
                    .lock()
                    .entry(thread::current().id())
                    .or_default()
                    .push(Arc::clone(&flag));
                flag
            }
        };
        StopFrame {
            state: self,
            flag,
            thread: thread::current().id(),
        }
    }

    /// Raise the stop flag of the calling thread's innermost emission.
    /// Returns false when that thread has no emission to stop.
    pub fn stop(&self) -> bool {
        match self.scope {
            StopScope::Shared => {
                self.shared.store(true, Ordering::SeqCst);
                true
            }
            StopScope::Emission => match self
                .frames
                .lock()
                .get(&thread::current().id())
                .and_then(|stack| stack.last())
            {
                Some(flag) => {
                    flag.store(true, Ordering::SeqCst);
                    true
                }
                None => false,
            },
        }
    }
}

/// Flag of one running emission; unregisters itself on drop
pub(crate) struct StopFrame<'a> {
    state: &'a StopState,
    flag: Arc<AtomicBool>,
    thread: ThreadId,
}

impl StopFrame<'_> {
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl Drop for StopFrame<'_> {
    fn drop(&mut self) {
        if self.state.scope == StopScope::Emission {
            let mut frames = self.state.frames.lock();
            if let Some(stack) = frames.get_mut(&self.thread) {
                if let Some(pos) = stack.iter().rposition(|f| Arc::ptr_eq(f, &self.flag)) {
                    stack.remove(pos);
                }
                if stack.is_empty() {
                    frames.remove(&self.thread);
                }
            }
        }
    }
}

/// Runs one emission against a tree
pub(crate) struct Dispatcher<'a, A, R> {
    tree: &'a Mutex<EventTree<A, R>>,
    stop: &'a StopState,
}

impl<'a, A, R> Dispatcher<'a, A, R> {
    pub fn new(tree: &'a Mutex<EventTree<A, R>>, stop: &'a StopState) -> Self {
        Self { tree, stop }
    }

    /// Dispatch `event` (already split into `segments`). Every handler return
    /// value is passed to `sink`.
    pub fn dispatch<F>(
        &self,
        event: &str,
        segments: &[&str],
        args: &A,
        mut sink: F,
    ) -> Emission
    where
        F: FnMut(R),
    {
        let frame = self.stop.begin();
        let chain = self.snapshot_chain(segments);
        let mut emission = Emission::default();

        trace!(event = %event, depth = chain.len(), "running pre-hooks");
        for node in &chain {
            for hook in &node.pre_hooks {
                hook.call(event);
            }
        }

        trace!(event = %event, "running handlers");
        'nodes: for (depth, node) in chain.iter().enumerate() {
            for handler in &node.handlers {
                if frame.is_stopped() {
                    emission.stopped = true;
                    trace!(event = %event, depth, "handler phase stopped");
                    break 'nodes;
                }
                if self.is_active(&segments[..=depth], handler) {
                    sink(handler.call(event, args));
                    emission.handlers_invoked += 1;
                }
            }
        }

        trace!(event = %event, "running post-hooks");
        for node in chain.iter().rev() {
            for hook in &node.post_hooks {
                hook.call(event);
            }
        }

        emission
    }

    fn snapshot_chain(&self, segments: &[&str]) -> Vec<NodeSnapshot<A, R>> {
        let mut chain = Vec::with_capacity(segments.len());
        self.tree
            .lock()
            .resolve_with(segments, |node| chain.push(node.snapshot()));
        chain
    }

    /// Block counts are read at call time so that blocking, disconnecting or
    /// clearing from an earlier handler applies to the rest of the pass.
    fn is_active(&self, path: &[&str], handler: &Handler<A, R>) -> bool {
        self.tree
            .lock()
            .lookup(path)
            .is_some_and(|node| node.is_active(handler))
    }
}
