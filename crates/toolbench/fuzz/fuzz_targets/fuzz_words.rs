//! Fuzz target for the word counter.
//!
//! Exercises the HTML and Markdown regexes with every option combination
//! and checks the count invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use toolbench::{analyze_text, count_words, WordCountOptions};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 10_000 {
        return;
    }

    // First byte selects the options.
    let flags = data[0];
    let options = WordCountOptions {
        strip_html: flags & 1 != 0,
        strip_markdown: flags & 2 != 0,
        count_code_blocks: flags & 4 != 0,
        count_image_alt: flags & 8 != 0,
        count_link_urls: flags & 16 != 0,
        count_media_elements: flags & 32 != 0,
    };

    let text = String::from_utf8_lossy(&data[1..]);
    let stats = analyze_text(&text, &options);
    assert!(stats.unique_words <= stats.total_words);
    assert_eq!(count_words(&text, &options), stats.total_words);
});
