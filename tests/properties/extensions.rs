//! Property tests for extension normalization.

use proptest::prelude::*;
use std::path::PathBuf;

use printwatch::domain::value_objects::{normalize_extension, ExtensionSet};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,64}") {
        let _ = normalize_extension(&s);
    }

    /// PROPERTY: normalized extensions are lowercase, dot-prefixed and stable.
    #[test]
    fn property_normalize_is_idempotent(s in "\\.?[A-Za-z0-9]{1,8}") {
        let once = normalize_extension(&s).unwrap();
        prop_assert!(once.starts_with('.'));
        prop_assert_eq!(once.to_lowercase(), once.clone());
        prop_assert_eq!(normalize_extension(&once), Some(once));
    }

    /// PROPERTY: membership ignores the case of the file's extension.
    #[test]
    fn property_match_is_case_insensitive(stem in "[a-z]{1,8}", ext in "[A-Za-z]{1,5}") {
        let set = ExtensionSet::new([ext.to_lowercase()]);
        let upper = PathBuf::from(format!("{stem}.{}", ext.to_uppercase()));
        let lower = PathBuf::from(format!("{stem}.{}", ext.to_lowercase()));
        prop_assert!(set.is_supported(&upper));
        prop_assert!(set.is_supported(&lower));
    }
}
