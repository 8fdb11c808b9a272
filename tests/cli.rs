//! Integration tests for the html-checker binary
//!
//! Each test writes its fixtures into a temp dir and runs the compiled
//! binary there, checking stdout, stderr and the exit code.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use tempfile::TempDir;

const PAGE: &str = r#"<html><body><h1>t</h1><div class="shoulda">x</div></body></html>"#;

/// Helper to create html-checker command in a directory
fn checker_in(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("html-checker").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Temp dir with index.html and checks.json under their default names
fn setup(checks: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), PAGE).unwrap();
    fs::write(dir.path().join("checks.json"), checks).unwrap();
    dir
}

/// Serves one canned HTML page over HTTP on a random local port
fn serve_page(body: &'static str) -> String {
    serve_response("200 OK", body)
}

/// Same as serve_page with a chosen status line
fn serve_response(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}/", addr)
}

#[test]
fn test_default_files_sorted_output() {
    let dir = setup(r##"["h1","div.shoulda","#shouldNotExist"]"##);

    checker_in(dir.path())
        .assert()
        .success()
        .stdout("{\n    \"#shouldNotExist\": false,\n    \"div.shoulda\": true,\n    \"h1\": true\n}\n");
}

#[test]
fn test_explicit_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.html"), "<p class=\"lead\">hi</p>").unwrap();
    fs::write(dir.path().join("mine.json"), r#"["p.lead", "table"]"#).unwrap();

    let output = checker_in(dir.path())
        .args(["--file", "page.html", "--checks", "mine.json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, serde_json::json!({"p.lead": true, "table": false}));
}

#[test]
fn test_empty_checks() {
    let dir = setup("[]");

    checker_in(dir.path()).assert().success().stdout("{}\n");
}

#[test]
fn test_all_missing_still_succeeds() {
    let dir = setup(r#"["footer", "nav"]"#);

    checker_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"footer\": false"))
        .stdout(predicate::str::contains("\"nav\": false"));
}

#[test]
fn test_missing_html_file() {
    let dir = setup(r#"["h1"]"#);

    checker_in(dir.path())
        .args(["--file", "missing.html"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.html does not exist"));
}

#[test]
fn test_missing_checks_file() {
    let dir = setup("[]");

    checker_in(dir.path())
        .args(["--checks", "nope.json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nope.json does not exist"));
}

#[test]
fn test_malformed_checks_file() {
    let dir = setup(r#"{"h1": true}"#);

    checker_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid checks list"));
}

#[test]
fn test_invalid_selector() {
    let dir = setup(r#"["h1", "div["]"#);

    checker_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("div["));
}

#[test]
fn test_no_source() {
    let dir = setup("[]");

    checker_in(dir.path())
        .args(["--file", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Either --url or --file must be specified"));
}

#[test]
fn test_url_source() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("checks.json"), r##"["h1", "div.shoulda", "#shouldNotExist"]"##).unwrap();
    let url = serve_page(PAGE);

    // No index.html here: --url must not look for it
    checker_in(dir.path())
        .args(["--url", &url])
        .assert()
        .success()
        .stdout("{\n    \"#shouldNotExist\": false,\n    \"div.shoulda\": true,\n    \"h1\": true\n}\n");
}

#[test]
fn test_error_status_body_is_graded() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("checks.json"), r#"["h1"]"#).unwrap();
    let url = serve_response("404 Not Found", "<h1>Not Found</h1>");

    checker_in(dir.path())
        .args(["--url", &url])
        .assert()
        .success()
        .stdout("{\n    \"h1\": true\n}\n");
}

#[test]
fn test_explicit_missing_file_with_url() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("checks.json"), r#"["h1"]"#).unwrap();
    let url = serve_page(PAGE);

    checker_in(dir.path())
        .args(["--file", "gone.html", "--url", &url])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("gone.html does not exist"));
}

#[test]
fn test_latin1_page() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), b"<h1>caf\xe9</h1>").unwrap();
    fs::write(dir.path().join("checks.json"), r#"["h1"]"#).unwrap();

    checker_in(dir.path())
        .assert()
        .success()
        .stdout("{\n    \"h1\": true\n}\n");
}

#[test]
fn test_unreachable_url() {
    let dir = setup(r#"["h1"]"#);
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();

    checker_in(dir.path())
        .args(["--url", &format!("http://127.0.0.1:{}/", port)])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("retrieval had error"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = setup(r#"["h1"]"#);

    checker_in(dir.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout("{\n    \"h1\": true\n}\n")
        .stderr(predicate::str::contains("Running 1 check(s)"));
}
