//! Core types and the event tree dispatcher for `evtree`.
//!
//! ## Key Components
//!
//! - **`events`**: the hierarchical publish/subscribe engine. An
//!   [`EventObject`] owns a tree of nodes keyed by event name segments and
//!   dispatches emissions through pre-hooks, handlers and post-hooks.
//! - **`errors`**: the `Error` enum and `Result` alias. Only malformed event
//!   names and configuration problems are errors; operations on unknown
//!   paths are silent no-ops.
//! - **`settings`**: per-object settings such as the segment separator and
//!   the scope of the stop flag.
//! - **`constants`**: shared constants such as environment variable names.

pub mod constants;
pub mod errors;
pub mod events;
pub mod settings;

pub use self::{
    constants::*,
    errors::{Error, Result},
    events::{global, initialize_global, Emission, EventObject, Handler, Hook},
    settings::{Settings, StopScope},
};
