// src/lib.rs
// =============================================================================
// html-checker: grade an HTML page for the presence of CSS selectors.
//
// The pipeline for one run:
// 1. Parse command-line arguments (cli)
// 2. Work out where the page comes from and read it (source)
// 3. Load the selectors from checks.json (checker::load_checks)
// 4. Run every selector against the parsed page (checker::check_document)
// 5. Print the results as pretty JSON on stdout
//
// Everything is public so other programs (and our tests) can reuse the
// checking functions without going through the command line.
// =============================================================================

pub mod checker;
pub mod cli;
pub mod error;
pub mod source;

use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use checker::CheckResults;
use cli::Cli;
use error::Result;
use source::{assert_file_exists, Source};

// Runs one check from parsed arguments and returns the results
//
// Nothing is printed here, main decides what to do with the output
pub async fn run(cli: &Cli) -> Result<CheckResults> {
    let source = Source::from_args(cli.file.as_ref().map(PathBuf::from), cli.url.clone())?;

    // Fail on a bad checks path before any network traffic
    let checks_file = assert_file_exists(&cli.checks)?;

    let html = source.load().await?;
    let checks = checker::load_checks(&checks_file)?;
    log::info!("Running {} check(s)", checks.len());

    // The document is parsed after the last .await, scraper's Html is not Send
    let document = checker::load_document(&html);
    checker::check_document(&document, &checks)
}

// Serializes results as JSON indented with 4 spaces
pub fn to_pretty_json(results: &CheckResults) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    results.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}

// Sets up env_logger on stderr, RUST_LOG still overrides the default
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .try_init();
}
