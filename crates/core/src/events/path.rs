//! Event name parsing

use crate::errors::{Error, Result};

/// Split an event name into its hierarchy segments.
///
/// Empty segments produced by leading, trailing or consecutive separators are
/// discarded, so `"a::b:"` yields `["a", "b"]`. A name with no non-empty
/// segment is rejected.
pub fn parse_segments(event: &str, separator: char) -> Result<Vec<&str>> {
    let segments: Vec<&str> = event
        .split(separator)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        return Err(Error::invalid_event_name(
            event,
            "event name contains no hierarchy segments",
        ));
    }

    Ok(segments)
}
