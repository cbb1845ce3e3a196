//! Property-based tests for the history log.
//!
//! For any sequence of record calls, the log never exceeds its cap and the
//! stored order is exactly newest-first.

use std::sync::Arc;

use proptest::prelude::*;
use skzbrowser::managers::history_manager::{HistoryManager, HistoryManagerTrait, HISTORY_CAP};
use skzbrowser::storage::LocalStore;

/// Strategy for generating valid URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
    )
        .prop_map(|(scheme, host, tld)| format!("{}://{}{}", scheme, host, tld))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn history_is_capped_and_newest_first(urls in prop::collection::vec(arb_url(), 1..120)) {
        let store = Arc::new(LocalStore::open_in_memory().unwrap());
        let mut manager = HistoryManager::new(store).unwrap();

        let mut recorded: Vec<String> = Vec::new();
        for url in &urls {
            manager.record(url, url).unwrap();
            recorded.push(url.clone());

            let entries = manager.entries();
            prop_assert!(
                entries.len() <= HISTORY_CAP,
                "Log holds {} entries, cap is {}",
                entries.len(),
                HISTORY_CAP
            );

            // The log is exactly the reversed tail of what was recorded
            let expected: Vec<&String> = recorded.iter().rev().take(HISTORY_CAP).collect();
            for (entry, expected_url) in entries.iter().zip(expected) {
                prop_assert_eq!(&entry.url, expected_url);
            }
        }

        // IDs are time-derived and issued monotonically, so newest-first
        // order means strictly descending IDs
        let ids: Vec<u64> = manager
            .entries()
            .iter()
            .map(|e| e.id.parse::<u64>().unwrap())
            .collect();
        for pair in ids.windows(2) {
            prop_assert!(pair[0] > pair[1], "IDs must descend: {:?}", pair);
        }
    }

    #[test]
    fn history_reloads_identically(urls in prop::collection::vec(arb_url(), 1..30)) {
        let store = Arc::new(LocalStore::open_in_memory().unwrap());
        {
            let mut manager = HistoryManager::new(store.clone()).unwrap();
            for url in &urls {
                manager.record(url, url).unwrap();
            }
        }

        let reloaded = HistoryManager::new(store).unwrap();
        let entries = reloaded.entries();
        prop_assert_eq!(entries.len(), urls.len().min(HISTORY_CAP));
        for (entry, url) in entries.iter().zip(urls.iter().rev()) {
            prop_assert_eq!(&entry.url, url);
        }
    }
}
