// src/checker/html.rs
// =============================================================================
// This module evaluates checks against an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// The page is parsed once, then every selector is run against that same
// document. A check passes when its selector matches at least one element.
//
// Rust concepts:
// - Result<T, E>: For operations that can fail (bad selectors)
// - BTreeMap: A map that keeps its keys sorted
// - Iterators: .next().is_some() stops at the first match
// =============================================================================

use std::collections::BTreeMap;
use std::path::Path;

use scraper::{Html, Selector};

use super::checks::load_checks;
use crate::error::{CheckError, Result};
use crate::source::read_html;

// Maps each selector to whether it matched anything
//
// BTreeMap keeps keys in sorted order, so the JSON we print is sorted too
pub type CheckResults = BTreeMap<String, bool>;

// Parses raw HTML text into a queryable document
pub fn load_document(html: &str) -> Html {
    Html::parse_document(html)
}

// Runs every check against the document
//
// Parameters:
//   document: the parsed page (borrowed, we only read it)
//   checks: selector strings, in any order, duplicates allowed
//
// Returns: selector -> present, one entry per distinct selector
//
// Example:
//   document = "<h1>t</h1>"
//   checks = ["p", "h1"]
//   result = {"h1": true, "p": false}
pub fn check_document(document: &Html, checks: &[String]) -> Result<CheckResults> {
    let mut sorted: Vec<&String> = checks.iter().collect();
    sorted.sort();

    let mut results = CheckResults::new();
    for check in sorted {
        let present = is_present(document, check)?;
        log::debug!("{} -> {}", check, present);
        results.insert(check.clone(), present);
    }

    Ok(results)
}

// Parses an HTML string and checks it
pub fn check_html_str(html: &str, checks: &[String]) -> Result<CheckResults> {
    let document = load_document(html);
    check_document(&document, checks)
}

// Reads an HTML file and a checks file from disk and checks one against the other
pub fn check_html_file(html_file: &Path, checks_file: &Path) -> Result<CheckResults> {
    let html = read_html(html_file)?;
    let checks = load_checks(checks_file)?;
    check_html_str(&html, &checks)
}

// Returns true if at least one element matches the selector
//
// The selector comes from the user, so a parse failure is an error, not a panic
fn is_present(document: &Html, selector: &str) -> Result<bool> {
    let parsed = Selector::parse(selector).map_err(|e| CheckError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;

    Ok(document.select(&parsed).next().is_some())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why collect references before sorting?
//    - checks is borrowed (&[String]), we can't sort it in place
//    - Sorting a Vec<&String> reorders pointers, no string copies
//    - We only clone each string once, when it goes into the map
//
// 2. What happens with duplicate selectors?
//    - insert() on an existing key just overwrites the value
//    - The value is the same both times (same document, same selector)
//    - So the map ends up with one entry per distinct selector
//
// 3. Why .next().is_some() instead of .count() > 0?
//    - select() returns a lazy iterator
//    - .next() stops at the first match, .count() would walk the whole page
// -----------------------------------------------------------------------------
