// src/source/fetch.rs
// =============================================================================
// Downloads a page over HTTP.
//
// One GET request, awaited to completion. No timeout, no retry: if the
// request fails we report it and the run stops.
//
// Rust concepts:
// - async functions: For network I/O
// - map_err: Attach the URL to reqwest's error so the message is useful
// =============================================================================

use reqwest::Client;
use url::Url;

use crate::error::{CheckError, Result};

// Fetches the body of a URL as text
//
// Returns: the response body, or Retrieval if the request itself failed
//
// A 404 or 500 still has a body and gets graded like any other page
pub async fn fetch_page(url: &Url) -> Result<String> {
    let client = Client::new();

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| retrieval_error(url, e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        log::debug!("{} answered HTTP {}", url, status.as_u16());
    } else {
        log::warn!("{} answered HTTP {}, checking the body anyway", url, status);
    }

    response
        .text()
        .await
        .map_err(|e| retrieval_error(url, e.to_string()))
}

fn retrieval_error(url: &Url, reason: String) -> CheckError {
    CheckError::Retrieval {
        url: url.to_string(),
        reason,
    }
}
