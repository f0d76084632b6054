//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use toolbench::{ApiKeysInput, WordCountOptions};

/// Toolbench: small, stateless developer utilities
#[derive(Parser)]
#[command(name = "toolbench")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate TypeScript declarations from JSON
    Types {
        /// JSON file to read (default: stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Name of the top-level declaration
        #[arg(short, long, default_value = toolbench::types::DEFAULT_TYPE_NAME)]
        name: String,

        /// Emit `type X = {...};` instead of an interface
        #[arg(long)]
        alias: bool,

        /// Reject input that is not strict JSON
        #[arg(long)]
        strict: bool,
    },

    /// Count words and compute text statistics
    Words {
        /// Text file to read (default: stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        #[command(flatten)]
        options: WordOptionArgs,

        /// Number of most frequent words to show
        #[arg(long, default_value = "10")]
        top: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Turn text into a URL slug
    Slug {
        /// Text to slugify (joined with spaces)
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,

        /// Replace spaces with underscores instead of hyphens
        #[arg(long)]
        underscore: bool,
    },

    /// Work out how many API keys a polling schedule needs
    ApiKeys {
        #[command(flatten)]
        input: ApiKeyArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the utilities as a JSON API
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        // Defaults for words requests that leave `options` out.
        #[command(flatten)]
        options: WordOptionArgs,

        /// Number of most frequent words in words responses
        #[arg(long, default_value_t = crate::server::state::DEFAULT_TOP_WORDS)]
        top: usize,
    },
}

/// Preprocessing flags for the `words` command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct WordOptionArgs {
    /// Count HTML tags as text
    #[arg(long)]
    pub no_strip_html: bool,

    /// Count Markdown syntax as text
    #[arg(long)]
    pub no_strip_markdown: bool,

    /// Leave out fenced, inline, and <code>/<pre> blocks
    #[arg(long)]
    pub skip_code: bool,

    /// Leave out image alt text
    #[arg(long)]
    pub skip_image_alt: bool,

    /// Count link URLs as words
    #[arg(long)]
    pub count_link_urls: bool,

    /// Count media elements (video, audio, ...) as words
    #[arg(long)]
    pub count_media: bool,
}

impl From<WordOptionArgs> for WordCountOptions {
    fn from(args: WordOptionArgs) -> Self {
        WordCountOptions::default()
            .with_strip_html(!args.no_strip_html)
            .with_strip_markdown(!args.no_strip_markdown)
            .with_code_blocks(!args.skip_code)
            .with_image_alt(!args.skip_image_alt)
            .with_link_urls(args.count_link_urls)
            .with_media_elements(args.count_media)
    }
}

/// Inputs for the `api-keys` command.
#[derive(clap::Args, Debug, Clone)]
pub struct ApiKeyArgs {
    /// Maximum requests per key per month
    #[arg(long)]
    pub requests_per_month: f64,

    /// Minutes between operations
    #[arg(long)]
    pub interval: f64,

    /// Number of keys available
    #[arg(long)]
    pub available_keys: Option<u32>,

    /// Requests issued by one operation
    #[arg(long)]
    pub requests_per_operation: Option<f64>,

    /// Days one key lasted at --known-interval
    #[arg(long)]
    pub limit_reached_in_days: Option<f64>,

    /// Interval (minutes) at which --limit-reached-in-days was observed
    #[arg(long)]
    pub known_interval: Option<f64>,
}

impl From<ApiKeyArgs> for ApiKeysInput {
    fn from(args: ApiKeyArgs) -> Self {
        ApiKeysInput {
            requests_per_month: args.requests_per_month,
            operation_interval: args.interval,
            available_keys: args.available_keys,
            requests_per_operation: args.requests_per_operation,
            limit_reached_in_days: args.limit_reached_in_days,
            known_interval: args.known_interval,
        }
    }
}
