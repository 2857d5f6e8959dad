#![no_main]

use avro_decorator::infrastructure::properties::{parse_properties, render_properties};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Whatever parses must survive a write and re-read unchanged
        if let Ok(entries) = parse_properties(content) {
            let rendered = render_properties(&entries, &["fuzz"]);
            assert_eq!(parse_properties(&rendered).ok(), Some(entries));
        }
    }
});
