//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create an invalid event name error
    #[must_use]
    pub fn invalid_event_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidEventName {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a file system error
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Whether this error was caused by a malformed event name
    pub fn is_invalid_event_name(&self) -> bool {
        matches!(self, Error::InvalidEventName { .. })
    }
}
