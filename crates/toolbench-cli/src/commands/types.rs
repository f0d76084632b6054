//! Types command - generate TypeScript declarations from JSON.

use std::path::PathBuf;

use colored::Colorize;
use toolbench::{parse_lenient, InferenceConfig, TypeInferrer};

use super::read_input;

pub fn run(
    file: Option<PathBuf>,
    name: String,
    alias: bool,
    strict: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(file.as_ref())?;

    let value = if strict {
        serde_json::from_str(&input)?
    } else {
        parse_lenient(&input)?
    };

    let config = InferenceConfig::new()
        .with_type_name(name)
        .with_type_alias(alias);
    let inferrer = TypeInferrer::with_config(config);
    let declaration = inferrer.infer(&value)?;

    if verbose {
        let source = file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string());
        eprintln!(
            "{} {} from {}",
            "Generated".green().bold(),
            inferrer.config().type_name.white().bold(),
            source
        );
    }

    println!("{}", declaration);
    Ok(())
}
