//! Configuration loading for evtree
//!
//! This crate resolves [`Settings`](evtree_core::Settings) for an event object
//! from defaults, an optional JSON file and environment overrides.

pub mod loader;


pub use loader::{ConfigLoader, SettingsFile};
