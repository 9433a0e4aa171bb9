// Generated projects: many signatures, sparse drift.

use docdrift_core::config::MatchConfig;
use docdrift_core::issues::IssueKind;
use docdrift_engine::DriftEngine;
use docdrift_parsers::SignatureCollector;

use crate::common::generators::{generate_markdown_docs, generate_python_module};
use crate::common::write_tree;

#[test]
fn test_generated_project_reports_only_drifted_functions() {
    let source = generate_python_module(200, 10);
    let docs = generate_markdown_docs(200);
    let dir = write_tree(&[("src/generated.py", source.as_str()), ("docs/api.md", docs.as_str())]);

    let collector = SignatureCollector::with_defaults();
    let code = collector.collect_code(&dir.path().join("src"));
    let doc = collector.collect_docs(&dir.path().join("docs"));
    assert_eq!(code.len(), 200);
    assert_eq!(doc.len(), 200);

    let set = DriftEngine::new(MatchConfig::default())
        .unwrap()
        .run(code, doc)
        .unwrap();
    assert_eq!(set.len(), 20);
    assert!(set.issues.iter().all(|i| i.kind == IssueKind::ParameterMismatch));
    assert_eq!(set.stats.matched, 200);

    // Issues within one file keep line order.
    let lines: Vec<u32> = set.issues.iter().filter_map(|i| i.line()).collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
}

#[test]
fn test_split_across_files_is_sorted_by_path() {
    let dir = write_tree(&[
        ("src/b.py", "def beta(x):\n    \"\"\"B.\"\"\"\n"),
        ("src/a.py", "def alpha(x):\n    \"\"\"A.\"\"\"\n"),
        ("docs/api.md", "# API\n"),
    ]);
    let collector = SignatureCollector::with_defaults();
    let set = DriftEngine::new(MatchConfig::default())
        .unwrap()
        .run(
            collector.collect_code(&dir.path().join("src")),
            collector.collect_docs(&dir.path().join("docs")),
        )
        .unwrap();
    let subjects: Vec<_> = set.issues.iter().map(|i| i.subject_name.as_str()).collect();
    assert_eq!(subjects, vec!["alpha", "beta"]);
}
