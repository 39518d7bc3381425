//! Constants used throughout the evtree codebase
// Event name hierarchy separator
pub const DEFAULT_SEPARATOR: char = ':';

// Environment variable names
pub const EVTREE_SEPARATOR_VAR: &str = "EVTREE_SEPARATOR";
pub const EVTREE_STOP_SCOPE_VAR: &str = "EVTREE_STOP_SCOPE";
