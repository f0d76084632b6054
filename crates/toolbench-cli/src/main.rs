//! Toolbench CLI - developer calculator utilities.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Types {
            file,
            name,
            alias,
            strict,
        } => commands::types::run(file, name, alias, strict, cli.verbose),

        Commands::Words {
            file,
            options,
            top,
            json,
        } => commands::words::run(file, options.into(), top, json, cli.verbose),

        Commands::Slug { text, underscore } => commands::slug::run(text, underscore),

        Commands::ApiKeys { input, json } => commands::api_keys::run(input.into(), json),

        Commands::Serve { port, options, top } => {
            commands::serve::run(port, options.into(), top, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, honoring `RUST_LOG` when it is set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
