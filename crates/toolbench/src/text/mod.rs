//! Format-aware word counting and text statistics.

mod counter;
mod options;
mod preprocess;

pub use counter::{analyze_text, count_words, normalize_word, tokenize, WordCountStats, WordCounter};
pub use options::WordCountOptions;
pub use preprocess::{preprocess, remove_code_blocks, strip_html, strip_markdown};
