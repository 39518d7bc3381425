//! Runtime settings for an event object
//!
//! Settings are immutable once an event object is built. They control how
//! event names are split into hierarchy segments and how `stop()` interacts
//! with nested emissions.

use crate::constants::DEFAULT_SEPARATOR;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which emission a `stop()` call applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopScope {
    /// Every emission owns its own stop flag. A nested emission started from
    /// a handler cannot reset or inherit the flag of the emission around it.
    #[default]
    Emission,
    /// One flag per event object, reset at the start of every emission.
    /// Nested emissions clobber the outer emission's flag.
    Shared,
}

impl StopScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopScope::Emission => "emission",
            StopScope::Shared => "shared",
        }
    }
}

impl fmt::Display for StopScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StopScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emission" => Ok(StopScope::Emission),
            "shared" => Ok(StopScope::Shared),
            other => Err(Error::configuration(format!(
                "unknown stop scope '{other}', expected 'emission' or 'shared'"
            ))),
        }
    }
}

/// Settings for an event object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Character separating hierarchy segments in event names
    pub separator: char,
    /// Scope of the stop flag
    pub stop_scope: StopScope,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            stop_scope: StopScope::default(),
        }
    }
}

impl Settings {
    /// Set the hierarchy separator
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the stop scope
    #[must_use]
    pub fn with_stop_scope(mut self, stop_scope: StopScope) -> Self {
        self.stop_scope = stop_scope;
        self
    }

    /// Reject settings that could never produce a usable event name
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_whitespace() || self.separator.is_control() {
            return Err(Error::configuration(format!(
                "separator {:?} must be a visible character",
                self.separator
            )));
        }
        Ok(())
    }
}
