//! Process-wide event object

use super::object::EventObject;
use crate::errors::{Error, Result};
use crate::settings::Settings;
use std::sync::OnceLock;
use tracing::debug;

/// Global event object instance
static GLOBAL_EVENT_OBJECT: OnceLock<EventObject> = OnceLock::new();

/// Get the global event object, creating it with default settings on first
/// access. There is no reset; tests should build private [`EventObject`]s.
pub fn global() -> &'static EventObject {
    GLOBAL_EVENT_OBJECT.get_or_init(|| {
        debug!("Auto-initializing global event object with default settings");
        EventObject::new()
    })
}

/// Initialize the global event object with custom settings.
///
/// Fails if the settings are invalid or the global object already exists,
/// whether from an earlier call or from [`global`].
pub fn initialize_global(settings: Settings) -> Result<&'static EventObject> {
    settings.validate()?;

    let mut created = false;
    let object = GLOBAL_EVENT_OBJECT.get_or_init(|| {
        created = true;
        EventObject::from_valid_settings(settings)
    });

    if !created {
        return Err(Error::configuration(
            "global event object already initialized",
        ));
    }

    debug!(
        separator = %settings.separator,
        stop_scope = %settings.stop_scope,
        "Global event object initialized"
    );
    Ok(object)
}
