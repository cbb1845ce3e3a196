//! Property-based tests for the result pager.
//!
//! The page window is always contiguous, in range, of the expected length,
//! and contains the current page; paging over the whole set reconstructs it.

use proptest::prelude::*;
use skzbrowser::services::result_pager::{paginate, total_pages, visible_page_window};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn window_is_contiguous_in_range_and_holds_current(
        total in 1usize..200,
        current in 1usize..200,
        window in 1usize..10,
    ) {
        let current = current.min(total);
        let pages = visible_page_window(current, total, window);

        prop_assert_eq!(pages.len(), usize::min(total, window));
        prop_assert!(*pages.first().unwrap() >= 1);
        prop_assert!(*pages.last().unwrap() <= total);
        prop_assert!(pages.contains(&current));

        for pair in pages.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }
    }

    #[test]
    fn paging_over_every_page_reconstructs_the_set(
        len in 0usize..200,
        page_size in 1usize..20,
    ) {
        let results: Vec<usize> = (0..len).collect();
        let total = total_pages(len, page_size);

        let mut reassembled = Vec::new();
        for page in 1..=total {
            reassembled.extend_from_slice(paginate(&results, page, page_size));
        }
        prop_assert_eq!(&reassembled, &results);

        // The page right past the end is always empty
        prop_assert!(paginate(&results, total + 1, page_size).is_empty());
    }
}
