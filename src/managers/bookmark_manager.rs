//! Bookmark Registry for SKZ Browser.
//!
//! Implements `BookmarkManagerTrait` — add/remove operations over an
//! append-ordered collection, persisted to the local store as a
//! JSON-encoded array on every mutation.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::LocalStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// Store key holding the JSON-encoded bookmark collection.
pub const BOOKMARKS_KEY: &str = "skz-bookmarks";

/// Icon marker assigned to bookmarks created through `add`.
const DEFAULT_FAVICON: &str = "⭐";

/// Trait defining bookmark registry operations.
pub trait BookmarkManagerTrait {
    fn add(&mut self, title: &str, url: &str) -> Result<String, StoreError>;
    fn remove(&mut self, id: &str) -> Result<(), StoreError>;
    fn bookmarks(&self) -> &[Bookmark];
}

/// Bookmark registry backed by the local store.
///
/// The store is the source of truth; the in-memory vector is a
/// write-through cache. A fresh profile (no stored value) is seeded with
/// default entries that are not persisted until the first mutation.
pub struct BookmarkManager {
    store: Arc<LocalStore>,
    bookmarks: Vec<Bookmark>,
    last_id: u64,
}

impl BookmarkManager {
    /// Creates a registry, loading any persisted bookmarks from the store.
    ///
    /// A missing or malformed stored value falls back to the default seed.
    pub fn new(store: Arc<LocalStore>) -> Result<Self, StoreError> {
        let bookmarks = match store.get(BOOKMARKS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| Self::default_bookmarks()),
            None => Self::default_bookmarks(),
        };
        Ok(Self {
            store,
            bookmarks,
            last_id: 0,
        })
    }

    /// Seed entries shown on a fresh profile.
    fn default_bookmarks() -> Vec<Bookmark> {
        [
            ("1", "Yandex", "https://yandex.ru", "🔍"),
            ("2", "YouTube", "https://youtube.com", "📺"),
            ("3", "GitHub", "https://github.com", "💻"),
            ("4", "VK", "https://vk.com", "💙"),
        ]
        .iter()
        .map(|(id, title, url, favicon)| Bookmark {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            favicon: Some(favicon.to_string()),
        })
        .collect()
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

    fn persist(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        let json = serde_json::to_string(bookmarks)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(BOOKMARKS_KEY, &json)
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Appends a bookmark with a fresh ID and the default icon marker, then
    /// persists the full collection. Duplicate (title, url) pairs are
    /// permitted. Returns the new bookmark's ID.
    fn add(&mut self, title: &str, url: &str) -> Result<String, StoreError> {
        let id = self.next_id();
        let bookmark = Bookmark {
            id: id.clone(),
            title: title.to_string(),
            url: url.to_string(),
            favicon: Some(DEFAULT_FAVICON.to_string()),
        };

        let mut updated = self.bookmarks.clone();
        updated.push(bookmark);

        self.persist(&updated)?;
        self.bookmarks = updated;
        Ok(id)
    }

    /// Filters out the matching entry and persists the result. Unknown IDs
    /// are silently ignored.
    fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        if !self.bookmarks.iter().any(|b| b.id == id) {
            return Ok(());
        }
        let updated: Vec<Bookmark> = self
            .bookmarks
            .iter()
            .filter(|b| b.id != id)
            .cloned()
            .collect();
        self.persist(&updated)?;
        self.bookmarks = updated;
        Ok(())
    }

    /// Bookmarks in append order.
    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }
}
