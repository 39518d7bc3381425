//! One node of the event tree

use super::collection::OrderedList;
use super::handler::{Handler, Hook};
use std::collections::HashMap;

/// Handlers, hooks and block state for one exact event path
pub struct EventNode<A, R> {
    handlers: OrderedList<Handler<A, R>>,
    pre_hooks: OrderedList<Hook>,
    post_hooks: OrderedList<Hook>,
    /// Present iff the handler is connected here; 0 means unblocked
    block_counts: HashMap<Handler<A, R>, usize>,
    pub(crate) children: HashMap<String, EventNode<A, R>>,
}

/// Copy of a node's callables taken for one emission
pub(crate) struct NodeSnapshot<A, R> {
    pub pre_hooks: Vec<Hook>,
    pub handlers: Vec<Handler<A, R>>,
    pub post_hooks: Vec<Hook>,
}

impl<A, R> Default for EventNode<A, R> {
    fn default() -> Self {
        Self {
            handlers: OrderedList::default(),
            pre_hooks: OrderedList::default(),
            post_hooks: OrderedList::default(),
            block_counts: HashMap::new(),
            children: HashMap::new(),
        }
    }
}

impl<A, R> EventNode<A, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler. A second connect of the same handler appends a
    /// second entry and keeps its existing block count.
    pub fn connect(&mut self, handler: &Handler<A, R>) {
        self.handlers.push_back(handler.clone());
        self.block_counts.entry(handler.clone()).or_insert(0);
    }

    /// Remove every entry of `handler` along with its block count
    pub fn disconnect(&mut self, handler: &Handler<A, R>) -> usize {
        self.block_counts.remove(handler);
        self.handlers.remove(handler)
    }

    /// Increment the block count; false if the handler is not connected here
    pub fn block(&mut self, handler: &Handler<A, R>) -> bool {
        match self.block_counts.get_mut(handler) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    /// Decrement the block count, floored at zero; false if nothing changed
    pub fn unblock(&mut self, handler: &Handler<A, R>) -> bool {
        match self.block_counts.get_mut(handler) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn block_count(&self, handler: &Handler<A, R>) -> Option<usize> {
        self.block_counts.get(handler).copied()
    }

    /// Connected here and not currently blocked
    pub fn is_active(&self, handler: &Handler<A, R>) -> bool {
        self.block_count(handler) == Some(0)
    }

    pub fn add_pre_hook(&mut self, hook: &Hook) {
        self.pre_hooks.push_back(hook.clone());
    }

    pub fn remove_pre_hook(&mut self, hook: &Hook) -> usize {
        self.pre_hooks.remove(hook)
    }

    /// Post-hooks are prepended so the most recently added runs first
    pub fn add_post_hook(&mut self, hook: &Hook) {
        self.post_hooks.push_front(hook.clone());
    }

    pub fn remove_post_hook(&mut self, hook: &Hook) -> usize {
        self.post_hooks.remove(hook)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Number of nodes in the subtree rooted here, this node included
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .values()
            .map(EventNode::subtree_len)
            .sum::<usize>()
    }

    pub(crate) fn snapshot(&self) -> NodeSnapshot<A, R> {
        NodeSnapshot {
            pre_hooks: self.pre_hooks.snapshot(),
            handlers: self.handlers.snapshot(),
            post_hooks: self.post_hooks.snapshot(),
        }
    }
}
