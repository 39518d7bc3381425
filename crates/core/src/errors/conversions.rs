//! Conversion implementations for error types

use super::types::Error;

// I/O failures go through `Error::file_system` so the path is never lost.
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}
