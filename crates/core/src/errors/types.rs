//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for evtree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for evtree operations using thiserror
///
/// Operations against unknown event paths are not errors; they are silent
/// no-ops. Only malformed input and configuration problems surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Event name that yields no hierarchy segments
    InvalidEventName { name: String, message: String },

    /// Configuration errors
    Configuration { message: String },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
