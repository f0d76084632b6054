//! Words command - count words and print text statistics.

use std::path::PathBuf;

use colored::Colorize;
use toolbench::{WordCountOptions, WordCounter};

use super::read_input;

pub fn run(
    file: Option<PathBuf>,
    options: WordCountOptions,
    top: usize,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(file.as_ref())?;

    let counter = WordCounter::new();
    let stats = counter.analyze_text(&text, &options);
    let top_words = stats.top_words(top);

    if json_output {
        let report = serde_json::json!({
            "wordCount": stats.total_words,
            "stats": stats,
            "topWords": top_words
                .iter()
                .map(|(word, count)| serde_json::json!({"word": word, "count": count}))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose {
        println!("{}", "Options".cyan().bold());
        println!("  strip html:      {}", options.strip_html);
        println!("  strip markdown:  {}", options.strip_markdown);
        println!("  code blocks:     {}", options.count_code_blocks);
        println!("  image alt:       {}", options.count_image_alt);
        println!("  link urls:       {}", options.count_link_urls);
        println!("  media elements:  {}", options.count_media_elements);
        println!();
    }

    println!("{}", "Text statistics".cyan().bold());
    println!();
    println!(
        "  Words:           {}",
        stats.total_words.to_string().white().bold()
    );
    println!("  Unique words:    {}", stats.unique_words);
    println!("  Sentences:       {}", stats.sentences);
    println!("  Avg word length: {:.2}", stats.average_word_length);

    if !top_words.is_empty() {
        println!();
        println!("{}", "Most common words".cyan().bold());
        let width = top_words.iter().map(|(w, _)| w.len()).max().unwrap_or(0);
        for (word, count) in &top_words {
            println!("  {:width$}  {}", word, count.to_string().dimmed(), width = width);
        }
    }

    Ok(())
}
