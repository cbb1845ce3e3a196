// SKZ Browser settings engine
// Manages user preferences: loading, saving, updating individual values, and
// resetting to defaults. Preferences are stored as JSON in the local store
// under a dedicated key.

use std::sync::Arc;

use crate::storage::LocalStore;
use crate::types::errors::{SettingsError, StoreError};
use crate::types::settings::{BrowserPreferences, SearchEngine};

/// Store key holding the JSON-encoded preferences.
pub const SETTINGS_KEY: &str = "skz-settings";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<BrowserPreferences, StoreError>;
    fn save(&self) -> Result<(), StoreError>;
    fn preferences(&self) -> &BrowserPreferences;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
}

/// Settings engine that persists preferences through the local store.
pub struct SettingsEngine {
    store: Arc<LocalStore>,
    preferences: BrowserPreferences,
}

impl SettingsEngine {
    /// Creates an engine holding default preferences. Call `load` to read
    /// the persisted value.
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self {
            store,
            preferences: BrowserPreferences::default(),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads preferences from the store.
    ///
    /// An absent or malformed stored value falls back to defaults.
    fn load(&mut self) -> Result<BrowserPreferences, StoreError> {
        self.preferences = match self.store.get(SETTINGS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => BrowserPreferences::default(),
        };
        Ok(self.preferences.clone())
    }

    /// Saves the current preferences to the store.
    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.preferences)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(SETTINGS_KEY, &json)
    }

    /// Returns a reference to the current in-memory preferences.
    fn preferences(&self) -> &BrowserPreferences {
        &self.preferences
    }

    /// Updates an individual preference by dot-notation key path and
    /// persists the result.
    ///
    /// # Examples
    /// - `"general.homepage"` → updates `preferences.general.homepage`
    /// - `"privacy.block_ads"` → updates `preferences.privacy.block_ads`
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        match key {
            "general.homepage" => {
                self.preferences.general.homepage = expect_string(key, &value)?;
            }
            "general.search_engine" => {
                self.preferences.general.search_engine =
                    serde_json::from_value::<SearchEngine>(value).map_err(|e| {
                        SettingsError::InvalidValue(format!(
                            "Invalid value for key '{}': {}",
                            key, e
                        ))
                    })?;
            }
            "privacy.save_history" => {
                self.preferences.privacy.save_history = expect_bool(key, &value)?;
            }
            "privacy.save_cookies" => {
                self.preferences.privacy.save_cookies = expect_bool(key, &value)?;
            }
            "privacy.block_ads" => {
                self.preferences.privacy.block_ads = expect_bool(key, &value)?;
            }
            _ => {
                return Err(SettingsError::InvalidKey(format!(
                    "Key '{}' not found in preferences",
                    key
                )))
            }
        }
        self.save().map_err(SettingsError::Store)
    }

    /// Resets all preferences to factory defaults and persists.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.preferences = BrowserPreferences::default();
        self.save().map_err(SettingsError::Store)
    }
}

fn expect_string(key: &str, value: &serde_json::Value) -> Result<String, SettingsError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| SettingsError::InvalidValue(format!("Expected a string for key '{}'", key)))
}

fn expect_bool(key: &str, value: &serde_json::Value) -> Result<bool, SettingsError> {
    value
        .as_bool()
        .ok_or_else(|| SettingsError::InvalidValue(format!("Expected a boolean for key '{}'", key)))
}
