// src/source/mod.rs
// =============================================================================
// This module figures out where the HTML page comes from and reads it.
//
// A page can come from:
// - a local file (--file, defaults to index.html)
// - a URL (--url), downloaded with reqwest
//
// If both are given the URL wins, but an explicit --file still has to exist.
// If neither is usable we stop with a configuration error before touching
// the network.
//
// Rust concepts:
// - Enums with data: Source::File holds a path, Source::Url holds a Url
// - async fn: Only the URL branch actually waits on anything
// =============================================================================

mod fetch;

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::cli::HTMLFILE_DEFAULT;
use crate::error::{CheckError, Result};

pub use fetch::fetch_page;

// Where the page to check lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(Url),
}

impl Source {
    // Picks the source from the command-line values
    //
    // No --file and no --url means index.html. An explicit --file must exist
    // even when --url wins. Empty strings count as "not given", so `--file ""`
    // with no --url ends up as a configuration error.
    pub fn from_args(file: Option<PathBuf>, url: Option<String>) -> Result<Source> {
        let explicit_file = file.is_some();
        let file = file
            .or_else(|| Some(PathBuf::from(HTMLFILE_DEFAULT)))
            .filter(|p| !p.as_os_str().is_empty());
        let url = url.filter(|u| !u.trim().is_empty());

        match (file, url) {
            (file, Some(url)) => {
                if let Some(file) = file.filter(|_| explicit_file) {
                    assert_file_exists(&file)?;
                }
                let parsed = Url::parse(url.trim()).map_err(|e| {
                    CheckError::Configuration(format!("Invalid URL '{}': {}", url, e))
                })?;
                Ok(Source::Url(parsed))
            }
            (Some(file), None) => Ok(Source::File(file)),
            (None, None) => Err(CheckError::Configuration(
                "Either --url or --file must be specified".to_string(),
            )),
        }
    }

    // Reads the page as text
    //
    // For files this checks existence first so the error names the path.
    // For URLs this is the one place the program waits on the network.
    pub async fn load(&self) -> Result<String> {
        match self {
            Source::File(path) => {
                log::debug!("Reading {}", path.display());
                read_html(path)
            }
            Source::Url(url) => {
                log::info!("Fetching {}", url);
                fetch_page(url).await
            }
        }
    }
}

// Reads a local HTML file
//
// Bytes that are not valid UTF-8 (Latin-1 pages and the like) are replaced
// instead of failing, html5ever copes with the result
pub fn read_html(path: &Path) -> Result<String> {
    let path = assert_file_exists(path)?;
    let bytes = fs::read(&path).map_err(|source| CheckError::Io { path, source })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// Makes sure a local input file exists
//
// Returns the path back so callers can chain on it
pub fn assert_file_exists(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(CheckError::MissingInput(path.to_path_buf()))
    }
}
