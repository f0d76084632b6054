//! Slug command - turn text into a URL slug.

use toolbench::{generate_slug, SlugOptions};

pub fn run(text: Vec<String>, underscore: bool) -> Result<(), Box<dyn std::error::Error>> {
    let options = SlugOptions {
        use_underscore: underscore,
    };
    println!("{}", generate_slug(&text.join(" "), &options));
    Ok(())
}
