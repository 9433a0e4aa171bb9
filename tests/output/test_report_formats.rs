// Every report format rendered from a real engine run.

use docdrift_core::config::MatchConfig;
use docdrift_core::issues::{IssueSet, Severity};
use docdrift_engine::DriftEngine;
use docdrift_output::{ReportFormat, ReportOptions};
use docdrift_parsers::SignatureCollector;

use crate::common::sample_repo;

fn sample_set() -> IssueSet {
    let root = sample_repo();
    let collector = SignatureCollector::with_defaults();
    DriftEngine::new(MatchConfig::default())
        .unwrap()
        .run(
            collector.collect_code(&root.join("src")),
            collector.collect_docs(&root.join("docs")),
        )
        .unwrap()
}

fn render(format: ReportFormat, set: &IssueSet) -> String {
    format.formatter().format_report(set)
}

#[test]
fn test_json_report_schema() {
    let out = render(ReportFormat::Json, &sample_set());
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["summary"]["total"], 6);
    assert_eq!(value["summary"]["critical"], 2);
    assert_eq!(value["summary"]["warning"], 4);
    assert_eq!(value["stats"]["matched"], 6);

    let issues = value["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 6);
    for issue in issues {
        assert!(issue["kind"].is_string());
        assert!(issue["severity"].is_string());
        assert!(issue["subject_name"].is_string());
        assert!(issue["message"].is_string());
        assert!(issue["code_location"].is_object() || issue["doc_location"].is_object());
    }
    assert_eq!(issues[0]["kind"], "MISSING_FROM_CODE");
    assert!(issues[0]["code_location"].is_null());
}

#[test]
fn test_markdown_report() {
    let out = render(ReportFormat::Markdown, &sample_set());
    assert!(out.contains("| **Total** | **6** |"));
    assert!(out.contains("- 🔴 **multiply**: Parameters [c] not documented for 'multiply'"));
    assert!(out.contains("- 🟡 **power**: Function 'power' is not documented"));
    assert!(out.contains("💡 *Add documentation for parameters: precision*"));
}

#[test]
fn test_github_annotations() {
    let out = render(ReportFormat::Github, &sample_set());
    let annotations: Vec<&str> = out.lines().filter(|l| l.starts_with("::error") || l.starts_with("::warning")).collect();
    assert_eq!(annotations.len(), 6);
    assert_eq!(out.matches("::error ").count(), 2);
    assert!(out.contains("Total issues: 6"));
}

#[test]
fn test_pr_comment() {
    let out = render(ReportFormat::PrComment, &sample_set());
    assert!(out.starts_with("## ❌ Documentation Drift Detected"));
    assert!(out.contains("### ❌ Critical Issues"));
    assert!(out.contains("<summary>⚠️ Warnings (4)</summary>"));
}

#[test]
fn test_min_severity_filter_before_rendering() {
    let options = ReportOptions {
        min_severity: Severity::Critical,
        max_issues: None,
    };
    let filtered = options.apply(&sample_set());
    let out = render(ReportFormat::Github, &filtered);
    assert_eq!(out.matches("::warning ").count(), 0);
    assert_eq!(out.matches("::error ").count(), 2);
    assert!(out.contains("Total issues: 2"));
}
