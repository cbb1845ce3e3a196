//! Property-based tests for bookmark persistence.
//!
//! For any sequence of adds, a registry reloaded from the same store holds
//! an equal collection.

use std::sync::Arc;

use proptest::prelude::*;
use skzbrowser::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use skzbrowser::storage::LocalStore;

/// Strategy for titles, including non-ASCII text.
fn arb_title() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9 ]{0,30}",
        Just("Закладка".to_string()),
        Just("日本語".to_string()),
        Just("quotes \"and\" slashes \\".to_string()),
    ]
}

/// Strategy for URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9]{2,15}", prop_oneof![Just(".com"), Just(".org"), Just(".io")])
        .prop_map(|(host, tld)| format!("https://{}{}", host, tld))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn added_bookmarks_roundtrip_through_the_store(
        pairs in prop::collection::vec((arb_title(), arb_url()), 1..20),
    ) {
        let store = Arc::new(LocalStore::open_in_memory().unwrap());

        let original = {
            let mut manager = BookmarkManager::new(store.clone()).unwrap();
            for (title, url) in &pairs {
                manager.add(title, url).unwrap();
            }
            manager.bookmarks().to_vec()
        };

        let reloaded = BookmarkManager::new(store).unwrap();
        prop_assert_eq!(reloaded.bookmarks(), original.as_slice());
    }

    #[test]
    fn removal_roundtrips_through_the_store(
        pairs in prop::collection::vec((arb_title(), arb_url()), 2..10),
        pick in 0usize..10,
    ) {
        let store = Arc::new(LocalStore::open_in_memory().unwrap());

        let (removed_id, remaining) = {
            let mut manager = BookmarkManager::new(store.clone()).unwrap();
            let mut ids = Vec::new();
            for (title, url) in &pairs {
                ids.push(manager.add(title, url).unwrap());
            }
            let removed = ids[pick % ids.len()].clone();
            manager.remove(&removed).unwrap();
            (removed, manager.bookmarks().to_vec())
        };

        let reloaded = BookmarkManager::new(store).unwrap();
        prop_assert_eq!(reloaded.bookmarks(), remaining.as_slice());
        prop_assert!(!reloaded.bookmarks().iter().any(|b| b.id == removed_id));
    }
}
