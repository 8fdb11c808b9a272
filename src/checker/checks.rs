// src/checker/checks.rs
// =============================================================================
// Loads the list of checks (CSS selectors) from a JSON file.
//
// The file is a flat JSON array of strings:
//   ["h1", "div.shoulda", "#shouldNotExist"]
//
// Rust concepts:
// - serde_json::from_str: Deserialize JSON text straight into Vec<String>
// - map_err: Turn a library error into our own CheckError
// =============================================================================

use std::fs;
use std::path::Path;

use crate::error::{CheckError, Result};
use crate::source::assert_file_exists;

// Reads and parses a checks file
//
// Fails with MissingInput if the file is not there, so the message
// names the path the user typed
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    let path = assert_file_exists(path)?;

    let text = fs::read_to_string(&path).map_err(|source| CheckError::Io {
        path: path.clone(),
        source,
    })?;

    let checks = parse_checks(&text, &path.display().to_string())?;
    log::debug!("Loaded {} check(s) from {}", checks.len(), path.display());
    Ok(checks)
}

// Parses checks from JSON text
//
// source_name only shows up in error messages
pub fn parse_checks(text: &str, source_name: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(text).map_err(|e| CheckError::InvalidChecks {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}
