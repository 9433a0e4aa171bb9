// `docdrift check` end to end on the demo repository.

use std::fs;

use crate::common::{run_docdrift, sample_repo, write_tree};

fn stdout(out: &std::process::Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_check_markdown_to_stdout() {
    let out = run_docdrift(&sample_repo(), &["check", "src", "docs"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.starts_with("# Documentation Drift Report"));
    assert!(text.contains("### 📁 `src/calculator.py`"));
    assert!(text.contains("Code: `src/calculator.py:21`, Doc: `docs/api.md:20`"));
}

#[test]
fn test_check_json_format() {
    let out = run_docdrift(&sample_repo(), &["check", "src", "docs", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["summary"]["total"], 6);
    assert_eq!(value["issues"][1]["code_location"]["file_path"], "src/calculator.py");
}

#[test]
fn test_check_min_severity() {
    let out = run_docdrift(
        &sample_repo(),
        &["check", "src", "docs", "--format", "json", "--min-severity", "critical"],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["summary"]["total"], 2);
}

#[test]
fn test_check_no_suggestions() {
    let out = run_docdrift(
        &sample_repo(),
        &["check", "src", "docs", "-f", "json", "--no-suggestions"],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let issues = value["issues"].as_array().unwrap();
    assert!(issues.iter().all(|i| i["suggestion"].is_null()));
}

#[test]
fn test_check_output_file_infers_json() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("drift.json");
    let out = run_docdrift(
        &sample_repo(),
        &["check", "src", "docs", "-o", report.to_str().unwrap()],
    );
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).is_empty());
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["summary"]["critical"], 2);
}

#[test]
fn test_check_github_format() {
    let out = run_docdrift(&sample_repo(), &["check", "src", "docs", "--format", "github"]);
    let text = stdout(&out);
    assert!(text.contains("::error file=src/calculator.py,line=21,"));
    assert!(text.contains("::group::Documentation Drift Summary"));
}

#[test]
fn test_check_exclude_flag() {
    let out = run_docdrift(
        &sample_repo(),
        &["check", "src", "docs", "-f", "json", "--exclude", "src/calculator.py"],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["summary"]["total"], 7);
}

#[test]
fn test_check_reads_config_from_cwd() {
    let dir = write_tree(&[
        (
            ".docdrift.json",
            r#"{ "severity_overrides": { "PARAMETER_MISMATCH": "info" } }"#,
        ),
        ("src/calc.py", "def multiply(a, b, c):\n    \"\"\"Multiply.\"\"\"\n"),
        ("docs/api.md", "## `multiply(a, b)`\n"),
    ]);
    let out = run_docdrift(dir.path(), &["check", "src", "docs", "-f", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["issues"][0]["kind"], "PARAMETER_MISMATCH");
    assert_eq!(value["issues"][0]["severity"], "info");
}

#[test]
fn test_check_fuzzy_flag_reports_rename() {
    let dir = write_tree(&[
        ("src/users.py", "def fetch_user_record(user_id):\n    \"\"\"Fetch.\"\"\"\n"),
        ("docs/api.md", "## `fetch_user_records(user_id)`\n"),
    ]);
    let plain = run_docdrift(dir.path(), &["check", "src", "docs", "-f", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&plain)).unwrap();
    assert_eq!(value["summary"]["total"], 2);

    let fuzzy = run_docdrift(dir.path(), &["check", "src", "docs", "-f", "json", "--fuzzy"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&fuzzy)).unwrap();
    assert_eq!(value["issues"][0]["kind"], "POSSIBLE_RENAME");
    assert_eq!(value["stats"]["fuzzy_matched"], 1);
}
