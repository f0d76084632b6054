//! URL slug generation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]+").unwrap());

/// Slug generation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlugOptions {
    /// Join words with `_` instead of `-`.
    pub use_underscore: bool,
}

/// Lowercase `text`, replace spaces with the separator, and drop every
/// other character outside `[A-Za-z0-9_-]`.
pub fn generate_slug(text: &str, options: &SlugOptions) -> String {
    let separator = if options.use_underscore { "_" } else { "-" };
    let lowered = text.to_lowercase().replace(' ', separator);
    NON_SLUG.replace_all(&lowered, "").into_owned()
}
