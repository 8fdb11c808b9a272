// src/checker/mod.rs
// =============================================================================
// This module contains all check evaluation logic.
//
// Submodules:
// - checks: Loads the list of selectors from checks.json
// - html: Parses the page and runs every selector against it
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `checker::check_document()` instead of
// `checker::html::check_document()`.
// =============================================================================

mod checks;
mod html;

pub use checks::{load_checks, parse_checks};
pub use html::{check_document, check_html_file, check_html_str, load_document, CheckResults};
