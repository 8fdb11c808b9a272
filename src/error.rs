// src/error.rs
// =============================================================================
// Every way a check run can fail.
//
// All of these are terminal: the binary prints the message and exits with 1.
// There is no retry and no partial output.
//
// Rust concepts:
// - thiserror: derive macro that implements std::error::Error and Display
// - #[source]: keeps the underlying error so callers can walk the chain
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// A required local file (HTML page or checks list) is not there
    #[error("{} does not exist", .0.display())]
    MissingInput(PathBuf),

    /// Downloading the page for --url failed
    #[error("{url} retrieval had error: {reason}")]
    Retrieval { url: String, reason: String },

    /// No usable document source was given
    #[error("{0}")]
    Configuration(String),

    /// scraper could not parse one of the selectors
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The checks list is not a JSON array of strings
    #[error("invalid checks list in {source_name}: {reason}")]
    InvalidChecks { source_name: String, reason: String },

    /// Any other problem reading a local file
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Shorthand used across the library
pub type Result<T> = std::result::Result<T, CheckError>;
