//! Endpoint file codec: anything rendered parses back unchanged.

use proptest::prelude::*;

use avro_decorator::domain::ports::Properties;
use avro_decorator::infrastructure::properties::{parse_properties, render_properties};

/// Keys and values shaped like cluster ids, URLs and options, plus noise.
fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9.:,/_-]{0,24}",
        "[ =:#!\\\\\\t\\n\\r]{0,6}[a-z]{0,4}",
        any::<String>(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn render_then_parse_is_identity(entries in prop::collection::btree_map(text(), text(), 0..8)) {
        let entries: Properties = entries;
        let rendered = render_properties(&entries, &["Schema registry per cluster endpoints"]);
        prop_assert_eq!(parse_properties(&rendered).unwrap(), entries);
    }

    #[test]
    fn parse_never_panics(input in any::<String>()) {
        let _ = parse_properties(&input);
    }

    #[test]
    fn parse_without_unicode_escapes_never_fails(input in "[^\\\\]*") {
        prop_assert!(parse_properties(&input).is_ok());
    }

    #[test]
    fn comments_never_leak_into_entries(comment in any::<String>()) {
        let rendered = render_properties(&Properties::new(), &[&comment]);
        prop_assert!(parse_properties(&rendered).unwrap().is_empty());
    }
}
