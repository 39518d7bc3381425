//! Configuration loader for evtree
//!
//! Settings are layered, later layers winning:
//!
//! 1. base settings (defaults unless [`ConfigLoader::settings`] is used)
//! 2. an optional JSON settings file
//! 3. `EVTREE_SEPARATOR` and `EVTREE_STOP_SCOPE` environment variables

use evtree_core::{
    constants::{EVTREE_SEPARATOR_VAR, EVTREE_STOP_SCOPE_VAR},
    Error, EventObject, Result, Settings, StopScope,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk settings; every field is optional and overrides the base value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub separator: Option<char>,
    pub stop_scope: Option<StopScope>,
}

impl SettingsFile {
    /// Read and parse a settings file
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system(path, "read", e))?;
        let file = serde_json::from_str(&content)?;
        Ok(file)
    }

    fn apply(&self, settings: &mut Settings) {
        if let Some(separator) = self.separator {
            settings.separator = separator;
        }
        if let Some(stop_scope) = self.stop_scope {
            settings.stop_scope = stop_scope;
        }
    }
}

/// Configuration loader that resolves event object settings
pub struct ConfigLoader {
    /// Starting point before file and environment overrides
    base: Settings,
    /// Optional JSON settings file
    file: Option<PathBuf>,
    /// Whether to read environment overrides
    use_environment: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            base: Settings::default(),
            file: None,
            use_environment: true,
        }
    }

    /// Set the base settings
    pub fn settings(mut self, settings: Settings) -> Self {
        self.base = settings;
        self
    }

    /// Set the JSON settings file to merge
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Set whether environment variables override file and base settings
    pub fn use_environment(mut self, enabled: bool) -> Self {
        self.use_environment = enabled;
        self
    }

    /// Load and validate the settings
    pub fn load(self) -> Result<Settings> {
        let mut settings = self.base;

        if let Some(path) = &self.file {
            let file = SettingsFile::read(path)?;
            debug!(path = %path.display(), ?file, "Applying settings file");
            file.apply(&mut settings);
        }

        if self.use_environment {
            apply_environment(&mut settings, |key| std::env::var(key).ok())?;
        }

        settings.validate()?;
        debug!(
            separator = %settings.separator,
            stop_scope = %settings.stop_scope,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Load settings and build an event object from them
    pub fn build<A, R>(self) -> Result<EventObject<A, R>> {
        EventObject::with_settings(self.load()?)
    }
}

fn apply_environment<F>(settings: &mut Settings, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(EVTREE_SEPARATOR_VAR) {
        settings.separator = parse_separator(&raw)?;
    }
    if let Some(raw) = lookup(EVTREE_STOP_SCOPE_VAR) {
        settings.stop_scope = raw.parse()?;
    }
    Ok(())
}

fn parse_separator(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(separator),
        _ => Err(Error::configuration(format!(
            "{EVTREE_SEPARATOR_VAR} must be exactly one character, got '{raw}'"
        ))),
    }
}
