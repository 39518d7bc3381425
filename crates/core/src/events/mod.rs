//! Hierarchical event dispatch
//!
//! Event names such as `"mouse:click"` address nodes of a tree. Emitting a
//! name runs, in order:
//!
//! 1. pre-hooks of every node on the path, root first
//! 2. handlers of every node on the path, root first, skipping blocked ones
//!    and ending early after `stop()`
//! 3. post-hooks of every node on the path, leaf first
//!
//! Nodes are created on demand by `connect`, the `add_*_hook` calls and
//! `emit`. Operations that only inspect or remove state never create nodes.

mod collection;
mod dispatch;
mod global;
mod handler;
mod node;
mod object;
mod path;
mod tree;

pub use collection::OrderedList;
pub use dispatch::Emission;
pub use global::{global, initialize_global};
pub use handler::{Handler, Hook};
pub use node::EventNode;
pub use object::EventObject;
pub use path::parse_segments;
pub use tree::EventTree;
