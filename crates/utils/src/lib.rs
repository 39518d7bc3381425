//! Shared utilities for evtree
//!
//! Currently this is the tracing setup used by binaries and tests that
//! want to see what the event tree dispatcher is doing.

pub mod tracing;

pub use self::tracing::*;
