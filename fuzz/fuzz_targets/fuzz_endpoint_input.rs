#![no_main]

use avro_decorator::EndpointInput;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        // Operator input parsing - this should never panic
        if let Ok(Some(input)) = EndpointInput::parse(line) {
            assert!(!input.endpoint.as_str().is_empty());
        }
    }
});
