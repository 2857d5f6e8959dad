//! Operator input parsing.

use proptest::prelude::*;

use avro_decorator::EndpointInput;

/// Percent-encode everything outside the unreserved set.
fn form_encode(text: &str) -> String {
    text.bytes()
        .map(|b| match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}

proptest! {
    #[test]
    fn parse_never_panics(input in any::<String>()) {
        let _ = EndpointInput::parse(&input);
    }

    #[test]
    fn encoded_options_decode_to_originals(
        endpoint in "[a-z][a-z0-9.-]{0,12}:[0-9]{2,5}",
        options in prop::collection::btree_map("[a-z][a-z.]{0,10}", ".+", 0..5),
    ) {
        let query: Vec<String> = options
            .iter()
            .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
            .collect();
        let raw = if query.is_empty() {
            endpoint.clone()
        } else {
            format!("{}?{}", endpoint, query.join("&"))
        };

        let parsed = EndpointInput::parse(&raw).unwrap().unwrap();
        prop_assert_eq!(parsed.endpoint.as_str(), endpoint.as_str());
        prop_assert_eq!(parsed.config, options);
    }

    #[test]
    fn blank_input_is_cancel(input in "[ \\t\\r\\n]*") {
        prop_assert_eq!(EndpointInput::parse(&input).unwrap(), None);
    }
}
