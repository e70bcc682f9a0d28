//! Property tests for settings resolution.

use proptest::prelude::*;

use printwatch::domain::entities::{PrintDefaults, PrintSettings};

fn defaults() -> impl Strategy<Value = PrintDefaults> {
    (
        proptest::option::of("[A-Za-z][A-Za-z0-9_]{0,12}"),
        "(A4|A5|Letter|Legal)",
        1u32..10,
        any::<bool>(),
    )
        .prop_map(|(printer, paper_size, copies, duplex)| PrintDefaults {
            printer,
            paper_size,
            copies,
            duplex,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: unset fields resolve to the defaults.
    #[test]
    fn property_unset_fields_take_defaults(defaults in defaults()) {
        let effective = PrintSettings::new().resolve(&defaults);
        prop_assert_eq!(effective.printer, defaults.printer);
        prop_assert_eq!(effective.paper_size, defaults.paper_size);
        prop_assert_eq!(effective.copies, defaults.copies);
        prop_assert_eq!(effective.duplex, defaults.duplex);
    }

    /// PROPERTY: set fields resolve to exactly what was passed.
    #[test]
    fn property_set_fields_win(
        defaults in defaults(),
        printer in "[A-Za-z][A-Za-z0-9_]{0,12}",
        paper_size in "(A4|A5|Letter|Legal)",
        copies in 1u32..50,
        duplex in any::<bool>(),
    ) {
        let settings = PrintSettings::new()
            .with_printer(printer.clone())
            .with_paper_size(paper_size.clone())
            .with_copies(copies)
            .with_duplex(duplex);
        let effective = settings.resolve(&defaults);
        prop_assert_eq!(effective.printer, Some(printer));
        prop_assert_eq!(effective.paper_size, paper_size);
        prop_assert_eq!(effective.copies, copies);
        prop_assert_eq!(effective.duplex, duplex);
    }

    /// PROPERTY: the resolved copy count is at least one.
    #[test]
    fn property_copies_at_least_one(
        copies in proptest::option::of(0u32..5),
        default_copies in 0u32..5,
    ) {
        let defaults = PrintDefaults { copies: default_copies, ..PrintDefaults::default() };
        let settings = PrintSettings { copies, ..PrintSettings::new() };
        prop_assert!(settings.resolve(&defaults).copies >= 1);
    }
}
