//! Serve command - run the JSON API server.

use colored::Colorize;
use toolbench::WordCountOptions;

use crate::server::{app, state::AppState};

pub fn run(
    port: u16,
    word_options: WordCountOptions,
    top: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new()
        .with_word_options(word_options)
        .with_top_words(top);

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting toolbench API at".cyan().bold(),
        url.white().bold()
    );
    println!();
    if verbose {
        println!("  POST /api/types");
        println!("  POST /api/words");
        println!("  POST /api/slug");
        println!("  POST /api/api-keys");
        println!("  GET  /api/health");
        println!();
    }
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, port))
}
