//! Toolbench: small, stateless developer utilities.
//!
//! The two engines with real algorithmic content are:
//!
//! - **Type inference** ([`types`]): turns a JSON value into a TypeScript-style
//!   structural declaration, deduplicating union members by their rendered
//!   signature.
//! - **Word counting** ([`text`]): strips HTML and Markdown, tokenizes, and
//!   computes frequency statistics.
//!
//! Around them sit a message-passing [`worker`] for running inference off
//! the caller's task, lenient [`json`] parsing for hand-typed input, and two
//! calculators ([`slug`], [`api_keys`]).
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use toolbench::{count_words, TypeInferrer, WordCountOptions};
//!
//! let types = TypeInferrer::new().infer(&json!({"id": 1})).unwrap();
//! assert_eq!(types, "interface GeneratedType {\n  id: number;\n}");
//!
//! let words = count_words("<p>Hello <b>world</b></p>", &WordCountOptions::default());
//! assert_eq!(words, 2);
//! ```

pub mod api_keys;
pub mod error;
pub mod json;
pub mod slug;
pub mod text;
pub mod types;
pub mod worker;

pub use api_keys::{ApiKeysInput, ApiKeysOutput};
pub use error::{Result, ToolbenchError};
pub use json::parse_lenient;
pub use slug::{generate_slug, SlugOptions};
pub use text::{analyze_text, count_words, WordCountOptions, WordCountStats, WordCounter};
pub use types::{infer, InferenceConfig, TypeInferrer, TypeNode};
pub use worker::{TypeRequest, TypeResponse, TypeWorker};
