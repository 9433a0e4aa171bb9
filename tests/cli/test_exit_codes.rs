// Exit codes: 0 clean or below --fail-on, 1 drift at or above, 2 errors.

use crate::common::{run_docdrift, sample_repo, write_tree};

#[test]
fn test_exit_0_without_fail_on() {
    let out = run_docdrift(&sample_repo(), &["check", "src", "docs"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_exit_1_when_drift_reaches_fail_on() {
    let out = run_docdrift(&sample_repo(), &["check", "src", "docs", "--fail-on", "critical"]);
    assert_eq!(out.status.code(), Some(1));
    let out = run_docdrift(&sample_repo(), &["check", "src", "docs", "--fail-on", "warning"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_fail_on_ignores_report_filter() {
    // Warnings are hidden from the report but still fail the run.
    let dir = write_tree(&[
        ("src/a.py", "def orphan(x):\n    \"\"\"Doc.\"\"\"\n"),
        ("docs/api.md", "# API\n"),
    ]);
    let out = run_docdrift(
        dir.path(),
        &["check", "src", "docs", "--min-severity", "critical", "--fail-on", "warning"],
    );
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_exit_0_when_below_fail_on() {
    let dir = write_tree(&[
        ("src/a.py", "def orphan(x):\n    \"\"\"Doc.\"\"\"\n"),
        ("docs/api.md", "# API\n"),
    ]);
    let out = run_docdrift(dir.path(), &["check", "src", "docs", "--fail-on", "critical"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_exit_0_when_in_sync() {
    let dir = write_tree(&[
        ("src/a.py", "def greet(name):\n    \"\"\"Greet.\"\"\"\n"),
        ("docs/api.md", "## `greet(name)`\n"),
    ]);
    let out = run_docdrift(dir.path(), &["check", "src", "docs", "--fail-on", "info"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("No Issues Found"));
}

#[test]
fn test_exit_2_on_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_docdrift(dir.path(), &["check", "nope", "docs"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not exist"));
}

#[test]
fn test_exit_2_on_bad_config() {
    let dir = write_tree(&[
        ("broken.json", "{ not json"),
        ("src/a.py", ""),
        ("docs/api.md", ""),
    ]);
    let out = run_docdrift(dir.path(), &["check", "src", "docs", "--config", "broken.json"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("broken.json"));
}

#[test]
fn test_exit_2_on_invalid_exclude_pattern() {
    let out = run_docdrift(&sample_repo(), &["check", "src", "docs", "--exclude", "src/["]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_exit_2_on_usage_error() {
    let out = run_docdrift(&sample_repo(), &["check", "src"]);
    assert_eq!(out.status.code(), Some(2));
}
