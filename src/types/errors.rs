use std::fmt;

// === StoreError ===

/// Errors related to the persistent key-value store.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite operation failed.
    Database(String),
    /// Failed to serialize a collection for persistence.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "Store database error: {}", msg),
            StoreError::Serialization(msg) => {
                write!(f, "Store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === SettingsError ===

/// Errors related to preference updates.
#[derive(Debug)]
pub enum SettingsError {
    /// The provided preference key is unknown.
    InvalidKey(String),
    /// The provided value does not fit the preference's type.
    InvalidValue(String),
    /// Persisting the updated preferences failed.
    Store(StoreError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidKey(key) => write!(f, "Invalid preference key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid preference value: {}", msg)
            }
            SettingsError::Store(err) => write!(f, "Preference store error: {}", err),
        }
    }
}

impl std::error::Error for SettingsError {}
