//! Structural type tree and its rendering.

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Keys matching this pattern are emitted bare; anything else is quoted.
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

const INDENT: &str = "  ";

/// Leaf type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Null,
    /// Placeholder when there is no information (empty arrays).
    Any,
}

impl Primitive {
    /// The rendered type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Null => "null",
            Primitive::Any => "any",
        }
    }
}

/// A node in an inferred structural type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// A leaf type.
    Primitive(Primitive),
    /// Array whose elements are one of the listed (distinct) types.
    ArrayOf(Vec<TypeNode>),
    /// One of several types.
    UnionOf(Vec<TypeNode>),
    /// Object with fields in first-seen order.
    ObjectShape(Vec<(String, TypeNode)>),
}

impl TypeNode {
    /// Classify a JSON value into a type tree.
    ///
    /// Array members are deduplicated by signature in first-occurrence
    /// order; object fields follow key insertion order.
    pub fn classify(value: &Value) -> TypeNode {
        match value {
            Value::Array(items) if items.is_empty() => {
                TypeNode::ArrayOf(vec![TypeNode::Primitive(Primitive::Any)])
            }
            Value::Array(items) => {
                TypeNode::ArrayOf(dedup_by_signature(items.iter().map(TypeNode::classify)))
            }
            Value::Null => TypeNode::Primitive(Primitive::Null),
            Value::Object(map) => TypeNode::ObjectShape(
                map.iter()
                    .map(|(key, value)| (key.clone(), TypeNode::classify(value)))
                    .collect(),
            ),
            Value::String(_) => TypeNode::Primitive(Primitive::String),
            Value::Number(_) => TypeNode::Primitive(Primitive::Number),
            Value::Bool(_) => TypeNode::Primitive(Primitive::Boolean),
        }
    }

    /// Returns true if this node is an object shape.
    pub fn is_object(&self) -> bool {
        matches!(self, TypeNode::ObjectShape(_))
    }

    /// The comparison key for deduplication: the node rendered at depth 0.
    pub fn signature(&self) -> String {
        self.render(0)
    }

    /// Render the node as if it started at the given nesting depth.
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write_to(&mut out, depth);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        match self {
            TypeNode::Primitive(p) => out.push_str(p.as_str()),
            TypeNode::ArrayOf(members) => match members.as_slice() {
                [] => out.push_str("any[]"),
                [single] => {
                    single.write_to(out, depth);
                    out.push_str("[]");
                }
                many => {
                    out.push('(');
                    write_joined(out, many, depth);
                    out.push_str(")[]");
                }
            },
            TypeNode::UnionOf(members) => write_joined(out, members, depth),
            TypeNode::ObjectShape(fields) => {
                if fields.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{\n");
                for (key, ty) in fields {
                    push_indent(out, depth + 1);
                    push_key(out, key);
                    out.push_str(": ");
                    ty.write_to(out, depth + 1);
                    out.push_str(";\n");
                }
                push_indent(out, depth);
                out.push('}');
            }
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

/// Keep the first node for each distinct signature, in encounter order.
pub fn dedup_by_signature(nodes: impl IntoIterator<Item = TypeNode>) -> Vec<TypeNode> {
    let mut seen: IndexMap<String, TypeNode> = IndexMap::new();
    for node in nodes {
        seen.entry(node.signature()).or_insert(node);
    }
    seen.into_values().collect()
}

fn write_joined(out: &mut String, members: &[TypeNode], depth: usize) {
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        member.write_to(out, depth);
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_key(out: &mut String, key: &str) {
    if IDENTIFIER.is_match(key) {
        out.push_str(key);
    } else {
        out.push_str(&Value::String(key.to_string()).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitives() {
        assert_eq!(TypeNode::classify(&json!("x")).signature(), "string");
        assert_eq!(TypeNode::classify(&json!(1.5)).signature(), "number");
        assert_eq!(TypeNode::classify(&json!(false)).signature(), "boolean");
        assert_eq!(TypeNode::classify(&json!(null)).signature(), "null");
    }

    #[test]
    fn test_empty_array_is_any() {
        assert_eq!(TypeNode::classify(&json!([])).signature(), "any[]");
    }

    #[test]
    fn test_array_union_keeps_first_occurrence_order() {
        let node = TypeNode::classify(&json!([true, 1, "a", 2, true]));
        assert_eq!(node.signature(), "(boolean | number | string)[]");
    }

    #[test]
    fn test_nested_arrays() {
        let node = TypeNode::classify(&json!([[1, 2], [3]]));
        assert_eq!(node.signature(), "number[][]");
    }

    #[test]
    fn test_nested_shape_indentation() {
        let node = TypeNode::classify(&json!({"user": {"id": 1}}));
        assert_eq!(node.render(0), "{\n  user: {\n    id: number;\n  };\n}");
    }

    #[test]
    fn test_same_shape_objects_dedup() {
        let node = TypeNode::classify(&json!([{"a": 1}, {"a": 2}, {"a": "x"}]));
        assert_eq!(
            node.signature(),
            "({\n  a: number;\n} | {\n  a: string;\n})[]"
        );
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(TypeNode::classify(&json!({})).signature(), "{}");
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let node = TypeNode::classify(&json!({"first-name": "a", "_ok": 1}));
        assert_eq!(
            node.signature(),
            "{\n  \"first-name\": string;\n  _ok: number;\n}"
        );
    }

    #[test]
    fn test_dedup_by_signature() {
        let nodes = vec![
            TypeNode::Primitive(Primitive::Number),
            TypeNode::Primitive(Primitive::String),
            TypeNode::Primitive(Primitive::Number),
        ];
        let distinct = dedup_by_signature(nodes);
        assert_eq!(distinct.len(), 2);
        assert_eq!(distinct[0], TypeNode::Primitive(Primitive::Number));
    }
}
