//! CLI command implementations.

pub mod api_keys;
pub mod serve;
pub mod slug;
pub mod types;
pub mod words;

use std::io::Read;
use std::path::PathBuf;

/// Read the whole input from `file`, or from stdin when no file is given.
pub(crate) fn read_input(file: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into()),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
