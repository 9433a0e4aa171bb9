// The demo calculator repository run through the full pipeline.

use docdrift_core::config::MatchConfig;
use docdrift_core::issues::{IssueKind, IssueSet, Severity};
use docdrift_engine::DriftEngine;
use docdrift_parsers::SignatureCollector;

use crate::common::sample_repo;

fn run_sample(config: MatchConfig) -> IssueSet {
    let root = sample_repo();
    let collector = SignatureCollector::with_defaults();
    let code = collector.collect_code(&root.join("src"));
    let docs = collector.collect_docs(&root.join("docs"));
    DriftEngine::new(config).unwrap().run(code, docs).unwrap()
}

#[test]
fn test_sample_repo_issues_in_report_order() {
    let set = run_sample(MatchConfig::default());
    let got: Vec<(IssueKind, &str)> = set
        .issues
        .iter()
        .map(|i| (i.kind, i.subject_name.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![
            (IssueKind::MissingFromCode, "old_square_root"),
            (IssueKind::ParameterMismatch, "multiply"),
            (IssueKind::ParameterMismatch, "Calculator"),
            (IssueKind::UndocumentedFunction, "power"),
            (IssueKind::UndocumentedFunction, "modulo"),
            (IssueKind::UndocumentedFunction, "Calculator.clear_history"),
        ]
    );
    assert_eq!(set.summary.total, 6);
    assert_eq!(set.summary.critical, 2);
    assert_eq!(set.summary.warning, 4);
    assert_eq!(set.summary.info, 0);
}

#[test]
fn test_sample_repo_parameter_mismatch_details() {
    let set = run_sample(MatchConfig::default());

    let multiply = set
        .of_kind(IssueKind::ParameterMismatch)
        .find(|i| i.subject_name == "multiply")
        .unwrap();
    assert_eq!(multiply.severity, Severity::Critical);
    assert_eq!(multiply.message, "Parameters [c] not documented for 'multiply'");
    assert_eq!(
        multiply.suggestion.as_deref(),
        Some("Add documentation for parameters: c")
    );
    let code = multiply.code_location.as_ref().unwrap();
    assert!(code.file_path.ends_with("src/calculator.py"));
    assert_eq!(code.line, 21);
    assert_eq!(multiply.doc_location.as_ref().unwrap().line, 20);

    let calculator = set
        .of_kind(IssueKind::ParameterMismatch)
        .find(|i| i.subject_name == "Calculator")
        .unwrap();
    assert_eq!(
        calculator.message,
        "Parameters [precision] not documented for 'Calculator'"
    );
}

#[test]
fn test_sample_repo_orphan_doc_has_no_code_location() {
    let set = run_sample(MatchConfig::default());
    let orphan = set.of_kind(IssueKind::MissingFromCode).next().unwrap();
    assert!(orphan.code_location.is_none());
    let doc = orphan.doc_location.as_ref().unwrap();
    assert!(doc.file_path.ends_with("docs/api.md"));
    assert_eq!(doc.line, 31);
}

#[test]
fn test_sample_repo_stats() {
    let set = run_sample(MatchConfig::default());
    assert_eq!(set.stats.code_signatures, 9);
    assert_eq!(set.stats.doc_signatures, 7);
    assert_eq!(set.stats.matched, 6);
    assert_eq!(set.stats.code_only, 3);
    assert_eq!(set.stats.doc_only, 1);
    assert_eq!(set.stats.duplicates, 0);
}

#[test]
fn test_sample_repo_is_deterministic() {
    assert_eq!(
        run_sample(MatchConfig::default()),
        run_sample(MatchConfig::default())
    );
}

#[test]
fn test_sample_repo_without_suggestions() {
    let config = MatchConfig {
        include_suggestions: false,
        ..MatchConfig::default()
    };
    let set = run_sample(config);
    assert_eq!(set.len(), 6);
    assert!(set.issues.iter().all(|i| i.suggestion.is_none()));
}
