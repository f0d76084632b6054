//! Fuzz target for type inference.
//!
//! Any input that parses as JSON must infer without panicking, and must
//! only fail for empty arrays or non-container values.

#![no_main]

use libfuzzer_sys::fuzz_target;
use toolbench::{infer, ToolbenchError};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        for alias in [false, true] {
            match infer(&value, "Fuzz", alias) {
                Ok(out) => assert!(!out.is_empty()),
                Err(ToolbenchError::EmptyInput(_)) => assert!(value.is_array()),
                Err(ToolbenchError::InvalidInput(_)) => {
                    assert!(!value.is_array() && !value.is_object())
                }
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
    }
});
