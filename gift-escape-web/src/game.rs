//! Web-specific bindings for the core
//!
//! Binds the progress store to `localStorage` and the personalization
//! overrides to the page query string, and re-exports the core types.

use std::collections::BTreeMap;

// Re-export all types from gift-escape-game
pub use gift_escape_game::*;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

fn storage() -> Result<web_sys::Storage, WebStorageError> {
    let win = crate::dom::window()
        .ok_or_else(|| WebStorageError::Unavailable(String::from("no browser window")))?;
    win.local_storage()
        .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))?
        .ok_or_else(|| WebStorageError::Unavailable(String::from("localStorage disabled")))
}

/// Web-specific progress storage using localStorage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebProgressStorage;

impl ProgressStorage for WebProgressStorage {
    type Error = WebStorageError;

    fn read_entry(&self, key: &str) -> Result<Option<String>, Self::Error> {
        storage()?
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))
    }

    fn write_entry(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        storage()?
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))
    }

    fn remove_entry(&self, key: &str) -> Result<(), Self::Error> {
        storage()?
            .remove_item(key)
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))
    }
}

/// Keep recognized keys only. The first occurrence of a repeated key wins,
/// matching `URLSearchParams.get`.
pub fn collect_overrides<I>(pairs: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut overrides = BTreeMap::new();
    for (key, value) in pairs {
        if ConfigKey::parse(&key).is_some() {
            overrides.entry(key).or_insert(value);
        }
    }
    overrides
}

/// Overrides from the current page's query string. Empty outside a browser.
#[must_use]
pub fn page_overrides() -> BTreeMap<String, String> {
    let Some(search) = crate::dom::window().and_then(|win| win.location().search().ok()) else {
        return BTreeMap::new();
    };
    let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
        return BTreeMap::new();
    };
    collect_overrides(ConfigKey::ALL.into_iter().filter_map(|key| {
        params
            .get(key.as_str())
            .map(|value| (key.as_str().to_string(), value))
    }))
}

/// Resolve the personalization for this page load.
#[must_use]
pub fn page_configuration() -> Configuration {
    resolve(&page_overrides())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_overrides_filters_unknown_and_keeps_first() {
        let pairs = vec![
            (String::from("name"), String::from("Álvaro")),
            (String::from("utm_source"), String::from("mail")),
            (String::from("name"), String::from("Second")),
            (String::from("note"), String::new()),
        ];
        let overrides = collect_overrides(pairs);
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides["name"], "Álvaro");
        let cfg = resolve(&overrides);
        assert_eq!(cfg.name, "Álvaro");
        assert_eq!(cfg.note, ConfigKey::Note.default_value());
    }

    #[test]
    fn page_helpers_fall_back_outside_browser() {
        assert!(page_overrides().is_empty());
        assert_eq!(page_configuration(), Configuration::default());
    }

    #[test]
    fn web_storage_degrades_without_browser() {
        assert!(matches!(
            WebProgressStorage.read_entry(STAGE_KEY),
            Err(WebStorageError::Unavailable(_))
        ));
        let controller = ProgressController::new(WebProgressStorage);
        assert_eq!(controller.state(), ProgressState::default());
    }
}
