//! JSON to structural type declaration inference.

mod inferrer;
mod node;

pub use inferrer::{infer, InferenceConfig, TypeInferrer, DEFAULT_TYPE_NAME};
pub use node::{dedup_by_signature, Primitive, TypeNode};
