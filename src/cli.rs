// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// a plain Rust struct and attributes (the #[...] things).
//
// Usage:
//   html-checker                                   # index.html + checks.json
//   html-checker --file page.html --checks my.json
//   html-checker --url https://example.com
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// Default file names, looked up in the current directory
pub const HTMLFILE_DEFAULT: &str = "index.html";
pub const CHECKSFILE_DEFAULT: &str = "checks.json";

#[derive(Parser, Debug)]
#[command(
    name = "html-checker",
    version,
    about = "Grade an HTML page for the presence of CSS selectors",
    long_about = "html-checker loads an HTML page from disk or a URL, runs every selector from a \
                  checks file against it and prints a JSON object mapping each selector to \
                  true (found) or false (not found)."
)]
pub struct Cli {
    /// Path to checks.json (a JSON array of CSS selectors)
    #[arg(short, long = "checks", value_name = "CHECK_FILE", default_value = CHECKSFILE_DEFAULT)]
    pub checks: PathBuf,

    /// Path to the HTML file to check [default: index.html]
    // No clap default: an explicit --file is checked even when --url is set.
    // Kept as a String because clap's PathBuf parser rejects "", which we report ourselves
    #[arg(short, long = "file", value_name = "HTML_FILE")]
    pub file: Option<String>,

    /// URL of the page to check (used instead of --file)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Print debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
