//! History Log for SKZ Browser.
//!
//! Implements `HistoryManagerTrait` — recording visits newest-first with a
//! fixed cap, deleting single entries, and clearing the log, persisted to
//! the local store as a JSON-encoded array.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::LocalStore;
use crate::types::errors::StoreError;
use crate::types::history::HistoryEntry;

/// Store key holding the JSON-encoded history collection.
pub const HISTORY_KEY: &str = "skz-history";

/// Maximum number of retained entries; older ones are silently dropped.
pub const HISTORY_CAP: usize = 50;

/// Trait defining history log operations.
pub trait HistoryManagerTrait {
    fn record(&mut self, url: &str, title: &str) -> Result<Option<String>, StoreError>;
    fn remove(&mut self, id: &str) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
    fn entries(&self) -> &[HistoryEntry];
    fn is_recording_enabled(&self) -> bool;
    fn set_recording_enabled(&mut self, enabled: bool);
}

/// History log backed by the local store.
///
/// The store is the source of truth across restarts; the in-memory vector
/// is a write-through cache of it. Every mutation persists the new
/// collection first and publishes the in-memory update only after the
/// write succeeded.
pub struct HistoryManager {
    store: Arc<LocalStore>,
    entries: Vec<HistoryEntry>,
    recording_enabled: bool,
    last_id: u64,
}

impl HistoryManager {
    /// Creates a manager, loading any persisted history from the store.
    ///
    /// A missing or malformed stored value is treated as an empty log.
    pub fn new(store: Arc<LocalStore>) -> Result<Self, StoreError> {
        let entries = match store.get(HISTORY_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self {
            store,
            entries,
            recording_enabled: true,
            last_id: 0,
        })
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// Issues a time-derived ID, bumped so same-millisecond calls stay unique.
    fn next_id(&mut self) -> String {
        let mut id = Self::now_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        id.to_string()
    }

    /// Renders the current wall-clock time as an "HH:MM" string (UTC).
    fn clock_time() -> String {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        format!("{:02}:{:02}", (secs / 3600) % 24, (secs / 60) % 60)
    }

    fn persist(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(HISTORY_KEY, &json)
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Records a visit at the head of the log, truncating to the cap.
    /// Returns the new entry's ID, or `None` when recording is disabled.
    fn record(&mut self, url: &str, title: &str) -> Result<Option<String>, StoreError> {
        if !self.recording_enabled {
            return Ok(None);
        }

        let id = self.next_id();
        let entry = HistoryEntry {
            id: id.clone(),
            url: url.to_string(),
            title: title.to_string(),
            time: Self::clock_time(),
        };

        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.push(entry);
        updated.extend(self.entries.iter().cloned());
        updated.truncate(HISTORY_CAP);

        self.persist(&updated)?;
        self.entries = updated;
        Ok(Some(id))
    }

    /// Deletes the single matching entry. Unknown IDs are silently ignored.
    fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        if !self.entries.iter().any(|e| e.id == id) {
            return Ok(());
        }
        let updated: Vec<HistoryEntry> = self
            .entries
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        self.persist(&updated)?;
        self.entries = updated;
        Ok(())
    }

    /// Empties the log and removes its persisted value entirely (not merely
    /// an empty persisted array).
    fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(HISTORY_KEY)?;
        self.entries.clear();
        Ok(())
    }

    /// Entries in newest-first order.
    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns whether history recording is enabled.
    fn is_recording_enabled(&self) -> bool {
        self.recording_enabled
    }

    /// Enables or disables history recording (driven by the save-history preference).
    fn set_recording_enabled(&mut self, enabled: bool) {
        self.recording_enabled = enabled;
    }
}
