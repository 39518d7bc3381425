//! Handler and hook callables with identity semantics
//!
//! Two `Handler`s are equal only when they are clones of the same wrapped
//! closure. That identity is what `disconnect`, `block` and the per-node block
//! counts key on, so callers keep a clone of the handler they connected.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

type HandlerFn<A, R> = dyn Fn(&str, &A) -> R + Send + Sync;
type HookFn = dyn Fn(&str) + Send + Sync;

/// Callable invoked with the event name and the emission arguments
pub struct Handler<A, R> {
    inner: Arc<HandlerFn<A, R>>,
}

impl<A, R> Handler<A, R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &A) -> R + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn call(&self, event: &str, args: &A) -> R {
        (self.inner)(event, args)
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner).cast::<()>() as usize
    }
}

impl<A, R> Clone for Handler<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, R> PartialEq for Handler<A, R> {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<A, R> Eq for Handler<A, R> {}

impl<A, R> Hash for Handler<A, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<A, R> fmt::Debug for Handler<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:#x})", self.addr())
    }
}

/// Callable run before or after the handler phase. Hooks only see the event
/// name and cannot be blocked.
#[derive(Clone)]
pub struct Hook {
    inner: Arc<HookFn>,
}

impl Hook {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn call(&self, event: &str) {
        (self.inner)(event)
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner).cast::<()>() as usize
    }
}

impl PartialEq for Hook {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Hook {}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hook({:#x})", self.addr())
    }
}
