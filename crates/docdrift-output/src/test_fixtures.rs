use docdrift_core::issues::{Issue, IssueKind, IssueSet, MatchStats, Severity};
use docdrift_core::types::SourceLocation;

pub fn issue(
    kind: IssueKind,
    severity: Severity,
    subject: &str,
    code: Option<(&str, u32)>,
    doc: Option<(&str, u32)>,
    message: &str,
    suggestion: Option<&str>,
) -> Issue {
    Issue {
        kind,
        severity,
        subject_name: subject.to_string(),
        code_location: code.map(|(f, l)| SourceLocation::new(f, l)),
        doc_location: doc.map(|(f, l)| SourceLocation::new(f, l)),
        message: message.to_string(),
        suggestion: suggestion.map(str::to_string),
    }
}

/// The four issues the sample calculator module produces against its docs.
pub fn calculator_set() -> IssueSet {
    IssueSet::new(vec![
        issue(
            IssueKind::ParameterMismatch,
            Severity::Critical,
            "multiply",
            Some(("src/calculator.py", 9)),
            Some(("docs/api.md", 12)),
            "Parameters [c] not documented for 'multiply'",
            Some("Add documentation for parameters: c"),
        ),
        issue(
            IssueKind::ParameterMismatch,
            Severity::Critical,
            "Calculator",
            Some(("src/calculator.py", 34)),
            Some(("docs/api.md", 30)),
            "Parameters [precision] not documented for 'Calculator'",
            Some("Add documentation for parameters: precision"),
        ),
        issue(
            IssueKind::UndocumentedFunction,
            Severity::Warning,
            "power",
            Some(("src/calculator.py", 20)),
            None,
            "Function 'power' is not documented",
            Some("Add documentation for power() in your docs"),
        ),
        issue(
            IssueKind::MissingFromCode,
            Severity::Warning,
            "old_square_root",
            None,
            Some(("docs/api.md", 24)),
            "Documented function 'old_square_root' not found in code",
            Some("Remove or update documentation for 'old_square_root'; it may have been renamed or deleted"),
        ),
    ])
    .with_stats(MatchStats {
        code_signatures: 8,
        doc_signatures: 8,
        matched: 7,
        fuzzy_matched: 0,
        code_only: 1,
        doc_only: 1,
        duplicates: 0,
    })
}
