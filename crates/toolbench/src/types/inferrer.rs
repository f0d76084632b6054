//! Top-level type declaration generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::node::{dedup_by_signature, TypeNode};
use crate::error::{Result, ToolbenchError};

/// Name given to the top-level declaration when none is provided.
pub const DEFAULT_TYPE_NAME: &str = "GeneratedType";

/// Configuration for type inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceConfig {
    /// Name of the top-level declaration.
    pub type_name: String,
    /// Emit `type X = {...};` instead of `interface X {...}` for objects.
    pub use_type_alias: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            type_name: DEFAULT_TYPE_NAME.to_string(),
            use_type_alias: false,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared type name.
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = name.into();
        self
    }

    /// Set whether object declarations use alias syntax.
    pub fn with_type_alias(mut self, use_alias: bool) -> Self {
        self.use_type_alias = use_alias;
        self
    }
}

/// Generates TypeScript-style declarations from JSON values.
pub struct TypeInferrer {
    config: InferenceConfig,
}

impl TypeInferrer {
    /// Create a new inferrer with default configuration.
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create an inferrer with custom configuration.
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Generate a named declaration for a JSON object or non-empty array.
    ///
    /// - An object yields an interface (or alias, if configured).
    /// - An array whose elements all share one object shape yields that
    ///   declaration followed by `[]`.
    /// - Any other array yields a union alias over the distinct element
    ///   types, regardless of the alias setting.
    ///
    /// Empty arrays fail with [`ToolbenchError::EmptyInput`]; scalars and
    /// null fail with [`ToolbenchError::InvalidInput`].
    pub fn infer(&self, value: &Value) -> Result<String> {
        match value {
            Value::Array(items) => self.infer_array(items),
            Value::Object(_) => Ok(self.named_declaration(&TypeNode::classify(value))),
            other => Err(ToolbenchError::InvalidInput(format!(
                "expected a JSON object or an array of values, found {}",
                kind_name(other)
            ))),
        }
    }

    fn infer_array(&self, items: &[Value]) -> Result<String> {
        if items.is_empty() {
            return Err(ToolbenchError::EmptyInput(
                "cannot generate types from an empty array".to_string(),
            ));
        }

        let members = dedup_by_signature(items.iter().map(TypeNode::classify));
        tracing::debug!(
            type_name = %self.config.type_name,
            elements = items.len(),
            distinct = members.len(),
            "classified top-level array"
        );

        match members.as_slice() {
            [shape] if shape.is_object() => Ok(format!("{}[]", self.named_declaration(shape))),
            _ => Ok(format!(
                "type {} = {};",
                self.config.type_name,
                TypeNode::UnionOf(members)
            )),
        }
    }

    fn named_declaration(&self, shape: &TypeNode) -> String {
        let name = &self.config.type_name;
        if self.config.use_type_alias {
            format!("type {} = {};", name, shape)
        } else {
            format!("interface {} {}", name, shape)
        }
    }
}

impl Default for TypeInferrer {
    fn default() -> Self {
        Self::new()
    }
}

/// Infer a declaration named `type_name` for `value`.
pub fn infer(value: &Value, type_name: &str, use_type_alias: bool) -> Result<String> {
    let config = InferenceConfig::new()
        .with_type_name(type_name)
        .with_type_alias(use_type_alias);
    TypeInferrer::with_config(config).infer(value)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_interface() {
        let out = TypeInferrer::new()
            .infer(&json!({"name": "Alice", "age": 30}))
            .unwrap();
        assert_eq!(out, "interface GeneratedType {\n  name: string;\n  age: number;\n}");
    }

    #[test]
    fn test_object_alias() {
        let out = infer(&json!({"name": "Alice", "age": 30}), "User", true).unwrap();
        assert_eq!(out, "type User = {\n  name: string;\n  age: number;\n};");
    }

    #[test]
    fn test_field_order_is_insertion_order() {
        let out = infer(&json!({"z": 1, "a": 2, "m": 3}), "T", false).unwrap();
        let z = out.find("z:").unwrap();
        let a = out.find("a:").unwrap();
        let m = out.find("m:").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn test_uniform_object_array() {
        let out = TypeInferrer::new()
            .infer(&json!([{"id": 1}, {"id": 2}]))
            .unwrap();
        assert_eq!(out, "interface GeneratedType {\n  id: number;\n}[]");
    }

    #[test]
    fn test_uniform_object_array_alias() {
        let out = infer(&json!([{"id": 1}]), "Row", true).unwrap();
        assert_eq!(out, "type Row = {\n  id: number;\n};[]");
    }

    #[test]
    fn test_heterogeneous_array_union() {
        let out = TypeInferrer::new().infer(&json!([1, "a", null, 2])).unwrap();
        assert_eq!(out, "type GeneratedType = number | string | null;");
    }

    #[test]
    fn test_uniform_primitive_array_is_alias() {
        let out = TypeInferrer::new().infer(&json!(["a", "b"])).unwrap();
        assert_eq!(out, "type GeneratedType = string;");
    }

    #[test]
    fn test_union_ignores_interface_setting() {
        let out = infer(&json!([{"a": 1}, {"b": 2}]), "Mixed", false).unwrap();
        assert!(out.starts_with("type Mixed = {"));
        assert!(out.ends_with("};"));
        assert!(out.contains("} | {"));
    }

    #[test]
    fn test_mixed_array_field() {
        let out = infer(&json!({"tags": [1, "x"], "empty": []}), "T", false).unwrap();
        assert_eq!(
            out,
            "interface T {\n  tags: (number | string)[];\n  empty: any[];\n}"
        );
    }

    #[test]
    fn test_empty_array_rejected() {
        let err = TypeInferrer::new().infer(&json!([])).unwrap_err();
        assert!(matches!(err, ToolbenchError::EmptyInput(_)));
    }

    #[test]
    fn test_scalars_rejected() {
        for value in [json!(null), json!(1), json!("s"), json!(true)] {
            let err = TypeInferrer::new().infer(&value).unwrap_err();
            assert!(matches!(err, ToolbenchError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = InferenceConfig::default();
        assert_eq!(config.type_name, "GeneratedType");
        assert!(!config.use_type_alias);
    }
}
