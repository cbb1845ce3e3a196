//! Unit tests for the LocalStore key-value API.
//!
//! Exercises get/set/remove semantics and on-disk persistence across
//! reopens, using a temporary directory for file-backed stores.

use skzbrowser::storage::{migrations, LocalStore};

#[test]
fn test_get_absent_key_returns_none() {
    let store = LocalStore::open_in_memory().unwrap();
    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn test_set_then_get_roundtrip() {
    let store = LocalStore::open_in_memory().unwrap();
    store.set("skz-bookmarks", "[]").unwrap();
    assert_eq!(store.get("skz-bookmarks").unwrap(), Some("[]".to_string()));
}

#[test]
fn test_set_overwrites_existing_value() {
    let store = LocalStore::open_in_memory().unwrap();
    store.set("key", "first").unwrap();
    store.set("key", "second").unwrap();
    assert_eq!(store.get("key").unwrap(), Some("second".to_string()));
}

#[test]
fn test_remove_deletes_value() {
    let store = LocalStore::open_in_memory().unwrap();
    store.set("key", "value").unwrap();
    store.remove("key").unwrap();
    assert_eq!(store.get("key").unwrap(), None);
}

#[test]
fn test_remove_absent_key_is_ok() {
    let store = LocalStore::open_in_memory().unwrap();
    store.remove("never-set").unwrap();
}

#[test]
fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let store = LocalStore::open(&path).unwrap();
        store.set("skz-history", "[{\"id\":\"1\"}]").unwrap();
    }

    let store = LocalStore::open(&path).unwrap();
    assert_eq!(
        store.get("skz-history").unwrap(),
        Some("[{\"id\":\"1\"}]".to_string())
    );
}

#[test]
fn test_removed_value_stays_absent_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let store = LocalStore::open(&path).unwrap();
        store.set("skz-history", "[]").unwrap();
        store.remove("skz-history").unwrap();
    }

    let store = LocalStore::open(&path).unwrap();
    assert_eq!(store.get("skz-history").unwrap(), None);
}

#[test]
fn test_migrations_record_current_version() {
    let store = LocalStore::open_in_memory().unwrap();
    assert_eq!(
        migrations::get_schema_version(store.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn test_open_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    // Opening twice must not re-run migrations destructively
    {
        let store = LocalStore::open(&path).unwrap();
        store.set("key", "value").unwrap();
    }
    let store = LocalStore::open(&path).unwrap();
    assert_eq!(store.get("key").unwrap(), Some("value".to_string()));
    assert_eq!(
        migrations::get_schema_version(store.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}
