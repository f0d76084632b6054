//! Fuzz target for lenient JSON parsing.
//!
//! Strict JSON must round-trip unchanged; anything else may fail but
//! must not panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use toolbench::parse_lenient;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let lenient = parse_lenient(input);
        if let Ok(strict) = serde_json::from_str::<serde_json::Value>(input) {
            assert_eq!(lenient.ok(), Some(strict));
        }
    }
});
