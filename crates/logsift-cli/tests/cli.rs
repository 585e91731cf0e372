//! Binary contract tests for `lsift`.
//!
//! The process is the container entrypoint, so these tests pin down the
//! externally observable contract: argument handling, the success summary
//! on stdout, error reporting on stderr, and exit codes.

#![allow(clippy::expect_used)]

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

fn log_line(time: &str, method: &str, path: &str, status: u16, id: &str) -> String {
    format!(
        "10.0.0.1 - - [{time}] \"{method} {path} HTTP/1.1\" {status} 1234 \
\"https://example.com/\" \"Mozilla/5.0\" 512 0.004 [svc-80] [] \
10.0.0.5:8080 1234 0.003 {status} {id}"
    )
}

fn lsift() -> Command {
    Command::cargo_bin("lsift").expect("binary should build")
}

fn csv_rows(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read csv")
        .split("\r\n")
        .filter(|l| !l.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[test]
fn success_prints_summary_and_exits_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("access.log");
    let output = dir.path().join("out.csv");
    std::fs::write(
        &input,
        format!(
            "{}\n{}\n",
            log_line("26/Apr/2021:21:20:17 +0000", "GET", "/a", 200, "one"),
            log_line("26/Apr/2021:21:20:18 +0000", "GET", "/b", 200, "two"),
        ),
    )
    .expect("write fixture");

    lsift()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("OK: parsed=2 rows, skipped_bad_lines=0"));

    let rows = csv_rows(&output);
    assert_eq!(rows.len(), 3, "header plus two rows");
    assert!(rows[0].starts_with("remote_addr,time_local,time_utc,"));
}

#[test]
fn missing_input_exits_two() {
    let dir = tempfile::tempdir().expect("tempdir");
    lsift()
        .arg("-i")
        .arg(dir.path().join("missing.log"))
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .code(2)
        .stderr(contains("ERROR: input not found"));
}

#[test]
fn strict_mode_exits_three_with_line_number() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("access.log");
    std::fs::write(
        &input,
        format!(
            "{}\nthis is not a log line\n",
            log_line("26/Apr/2021:21:20:17 +0000", "GET", "/a", 200, "one"),
        ),
    )
    .expect("write fixture");

    lsift()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .arg("--strict")
        .assert()
        .failure()
        .code(3)
        .stderr(contains("line 2 does not match format"));
}

#[test]
fn lenient_mode_counts_bad_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("access.log");
    std::fs::write(
        &input,
        format!(
            "{}\nthis is not a log line\n",
            log_line("26/Apr/2021:21:20:17 +0000", "GET", "/a", 200, "one"),
        ),
    )
    .expect("write fixture");

    lsift()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .assert()
        .success()
        .stdout(contains("parsed=1 rows, skipped_bad_lines=1"));
}

#[test]
fn status_filter_narrows_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("access.log");
    let output = dir.path().join("out.csv");
    std::fs::write(
        &input,
        format!(
            "{}\n{}\n",
            log_line("26/Apr/2021:21:20:17 +0000", "GET", "/a", 200, "ok-row"),
            log_line("26/Apr/2021:21:20:18 +0000", "GET", "/b", 404, "missing-row"),
        ),
    )
    .expect("write fixture");

    lsift()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--status", "404"])
        .assert()
        .success()
        .stdout(contains("parsed=1 rows"));

    let rows = csv_rows(&output);
    assert_eq!(rows.len(), 2);
    assert!(rows[1].contains(",missing-row,"));
}

#[test]
fn path_filter_narrows_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("access.log");
    let output = dir.path().join("out.csv");
    std::fs::write(
        &input,
        format!(
            "{}\n{}\n",
            log_line("26/Apr/2021:21:20:17 +0000", "GET", "/api/items", 200, "api-row"),
            log_line("26/Apr/2021:21:20:18 +0000", "GET", "/health", 200, "health-row"),
        ),
    )
    .expect("write fixture");

    lsift()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--path-contains", "/api"])
        .assert()
        .success()
        .stdout(contains("parsed=1 rows"));

    assert!(csv_rows(&output)[1].contains(",api-row,"));
}

#[test]
fn descending_sort_with_limit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("access.log");
    let output = dir.path().join("out.csv");
    std::fs::write(
        &input,
        format!(
            "{}\n{}\n{}\n",
            log_line("26/Apr/2021:21:20:17 +0000", "GET", "/a", 200, "oldest"),
            log_line("26/Apr/2021:21:20:19 +0000", "GET", "/a", 200, "newest"),
            log_line("26/Apr/2021:21:20:18 +0000", "GET", "/a", 200, "middle"),
        ),
    )
    .expect("write fixture");

    lsift()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--desc", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("parsed=1 rows"));

    let rows = csv_rows(&output);
    assert_eq!(rows.len(), 2);
    assert!(rows[1].contains(",newest,"));
}

#[test]
fn invalid_since_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("access.log");
    std::fs::write(&input, "").expect("write fixture");

    lsift()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .args(["--since", "yesterday"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("ERROR: invalid timestamp"));
}

#[test]
fn missing_required_arguments_is_a_usage_error() {
    lsift().assert().failure().code(2);
}
