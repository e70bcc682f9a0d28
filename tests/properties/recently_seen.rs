//! Property tests for discovery de-duplication.

use proptest::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

use printwatch::domain::entities::{RecentlySeen, RECENTLY_SEEN_CAPACITY};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: without eviction, each distinct path is accepted exactly once.
    #[test]
    fn property_each_path_accepted_once(names in proptest::collection::vec("[a-z]{1,4}", 0..80)) {
        let mut seen = RecentlySeen::default();
        let mut accepted = HashSet::new();
        for name in &names {
            let path = PathBuf::from(format!("/in/{name}.pdf"));
            let fresh = seen.insert(&path);
            prop_assert_eq!(fresh, accepted.insert(path));
        }
    }

    /// PROPERTY: the set never grows past its capacity.
    #[test]
    fn property_capacity_is_bounded(count in 0usize..400) {
        let mut seen = RecentlySeen::default();
        for i in 0..count {
            seen.insert(&PathBuf::from(format!("/in/{i}.pdf")));
        }
        prop_assert!(seen.len() <= RECENTLY_SEEN_CAPACITY);
        prop_assert_eq!(seen.len(), count.min(RECENTLY_SEEN_CAPACITY));
    }

    /// PROPERTY: once evicted, a path can be reported again.
    #[test]
    fn property_evicted_path_is_fresh_again(extra in 1usize..50) {
        let mut seen = RecentlySeen::default();
        let first = PathBuf::from("/in/first.pdf");
        seen.insert(&first);
        for i in 0..(RECENTLY_SEEN_CAPACITY - 1 + extra) {
            seen.insert(&PathBuf::from(format!("/in/{i}.pdf")));
        }
        prop_assert!(!seen.contains(&first));
        prop_assert!(seen.insert(&first));
    }
}
