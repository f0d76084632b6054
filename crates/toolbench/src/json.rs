//! Lenient JSON parsing for hand-typed input.
//!
//! Accepts JavaScript-style object literals: unquoted or single-quoted keys,
//! single-quoted strings, and trailing commas. The repairs are textual, so
//! strings containing `'` or `word:` sequences can be altered; strict JSON
//! is always tried first and is never rewritten.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::Result;

static BARE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(['"])?([a-zA-Z0-9_]+)(['"])?:"#).unwrap());
static TRAILING_COMMA_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*\}").unwrap());
static TRAILING_COMMA_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*\]").unwrap());

/// Parse `input` as JSON, repairing common hand-typed mistakes on failure.
pub fn parse_lenient(input: &str) -> Result<Value> {
    match serde_json::from_str(input) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::debug!(error = %e, "strict JSON parse failed, repairing input");
            let repaired = repair(input);
            Ok(serde_json::from_str(&repaired)?)
        }
    }
}

/// Apply the textual repairs without parsing.
pub fn repair(input: &str) -> String {
    let text = BARE_KEY.replace_all(input, "\"${2}\":");
    let text = text.replace('\'', "\"");
    let text = TRAILING_COMMA_OBJECT.replace_all(&text, "}");
    TRAILING_COMMA_ARRAY.replace_all(&text, "]").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_json_untouched() {
        let value = parse_lenient(r#"{"url": "http://x.io"}"#).unwrap();
        assert_eq!(value, json!({"url": "http://x.io"}));
    }

    #[test]
    fn test_unquoted_keys_and_single_quotes() {
        let value = parse_lenient("{name: 'Alice', 'age': 30}").unwrap();
        assert_eq!(value, json!({"name": "Alice", "age": 30}));
    }

    #[test]
    fn test_trailing_commas() {
        let value = parse_lenient("{a: [1, 2, ], b: {c: true,},}").unwrap();
        assert_eq!(value, json!({"a": [1, 2], "b": {"c": true}}));
    }

    #[test]
    fn test_repair_keeps_key_order() {
        let value = parse_lenient("{z: 1, a: 2}").unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_unrepairable_input_errors() {
        assert!(parse_lenient("{not json at all").is_err());
    }
}
