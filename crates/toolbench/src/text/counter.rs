//! Word counting and text statistics.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::options::WordCountOptions;
use super::preprocess::preprocess;

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Characters removed from a token before frequency counting.
const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')'];

/// Detailed statistics about a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCountStats {
    /// Total number of words.
    pub total_words: usize,
    /// Number of distinct normalized words.
    pub unique_words: usize,
    /// Number of sentences (split on terminators followed by whitespace).
    pub sentences: usize,
    /// Normalized characters per word.
    pub average_word_length: f64,
    /// Occurrences of each normalized word, in first-seen order.
    pub word_frequency: IndexMap<String, usize>,
}

impl WordCountStats {
    /// The `n` most frequent words, highest count first.
    ///
    /// Ties keep first-seen order.
    pub fn top_words(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .word_frequency
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

/// Counts words in plain text, HTML, and Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCounter;

impl WordCounter {
    /// Create a new word counter.
    pub fn new() -> Self {
        Self
    }

    /// Count words after stripping the formatting selected by `options`.
    ///
    /// Empty or whitespace-only text counts as zero.
    pub fn count_words(&self, text: &str, options: &WordCountOptions) -> usize {
        if text.trim().is_empty() {
            return 0;
        }

        let processed = preprocess(text, options);
        tokenize(&processed).len()
    }

    /// Compute word, sentence, and frequency statistics.
    ///
    /// Tokens that are pure punctuation still count toward `total_words`
    /// but contribute nothing to the frequency map or character total, so
    /// they pull `average_word_length` down.
    pub fn analyze_text(&self, text: &str, options: &WordCountOptions) -> WordCountStats {
        if text.trim().is_empty() {
            return WordCountStats::default();
        }

        let processed = preprocess(text, options);
        let words = tokenize(&processed);

        let mut word_frequency: IndexMap<String, usize> = IndexMap::new();
        let mut total_characters = 0usize;

        for word in &words {
            let normalized = normalize_word(word);
            if normalized.is_empty() {
                continue;
            }
            total_characters += normalized.chars().count();
            *word_frequency.entry(normalized).or_insert(0) += 1;
        }

        let sentences = SENTENCE_BREAK.split(&processed).count();

        let average_word_length = if words.is_empty() {
            0.0
        } else {
            total_characters as f64 / words.len() as f64
        };

        tracing::debug!(
            total_words = words.len(),
            unique_words = word_frequency.len(),
            sentences,
            "analyzed text"
        );

        WordCountStats {
            total_words: words.len(),
            unique_words: word_frequency.len(),
            sentences,
            average_word_length,
            word_frequency,
        }
    }
}

/// Count words in `text` with the given options.
pub fn count_words(text: &str, options: &WordCountOptions) -> usize {
    WordCounter::new().count_words(text, options)
}

/// Analyze `text` with the given options.
pub fn analyze_text(text: &str, options: &WordCountOptions) -> WordCountStats {
    WordCounter::new().analyze_text(text, options)
}

/// Split preprocessed text into words; URLs collapse to the token `url`.
pub fn tokenize(text: &str) -> Vec<String> {
    URL.replace_all(text, " url ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lowercase and remove the punctuation set from anywhere in the token.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect()
}
