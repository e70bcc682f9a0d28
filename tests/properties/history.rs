//! Property tests for the capped history log.

use proptest::prelude::*;
use std::path::Path;

use printwatch::domain::entities::{HistoryRecord, PrintHistory};

fn record(i: usize) -> HistoryRecord {
    HistoryRecord::now(Path::new(&format!("/in/{i}.pdf")), "P1", i % 2 == 0, None)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after each push the length is min(previous + 1, limit).
    #[test]
    fn property_length_is_capped(limit in 1usize..20, pushes in 0usize..60) {
        let mut history = PrintHistory::new(limit);
        for i in 0..pushes {
            let before = history.len();
            history.push(record(i));
            prop_assert_eq!(history.len(), (before + 1).min(limit));
        }
    }

    /// PROPERTY: the survivors are the newest records, in insertion order.
    #[test]
    fn property_oldest_evicted_first(limit in 1usize..20, pushes in 0usize..60) {
        let mut history = PrintHistory::new(limit);
        for i in 0..pushes {
            history.push(record(i));
        }
        let expected: Vec<String> = (pushes.saturating_sub(limit)..pushes)
            .map(|i| format!("{i}.pdf"))
            .collect();
        let actual: Vec<String> = history.iter().map(|r| r.file_name.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: lowering the limit keeps only the newest records.
    #[test]
    fn property_shrinking_limit_truncates(pushes in 0usize..40, new_limit in 1usize..10) {
        let mut history = PrintHistory::new(100);
        for i in 0..pushes {
            history.push(record(i));
        }
        history.set_limit(new_limit);
        prop_assert!(history.len() <= new_limit);
        if pushes > 0 {
            let last = format!("{}.pdf", pushes - 1);
            prop_assert_eq!(history.last().map(|r| r.file_name.clone()), Some(last));
        }
    }
}
