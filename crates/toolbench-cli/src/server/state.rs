//! Application state for the web server.

use toolbench::WordCountOptions;

/// Default number of entries in a `topWords` list.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Shared application state.
///
/// Every request is independent; the state only carries per-server defaults.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Options used when a words request leaves `options` out.
    pub word_options: WordCountOptions,
    /// Length of the `topWords` list in words responses.
    pub top_words: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            word_options: WordCountOptions::default(),
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl AppState {
    /// Create new application state with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default word counting options.
    pub fn with_word_options(mut self, options: WordCountOptions) -> Self {
        self.word_options = options;
        self
    }

    /// Set the length of `topWords` lists.
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }
}
