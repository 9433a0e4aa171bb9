use std::collections::{BTreeMap, HashSet};

use docdrift_core::config::MatchConfig;
use docdrift_core::issues::{Issue, IssueKind, IssueSet, Severity};
use docdrift_core::types::SourceLocation;

use crate::suggestions::{message_for, suggestion_for};
use crate::types::RawDiscrepancy;

/// Turns raw discrepancies into the final ordered [`IssueSet`].
#[derive(Debug, Clone)]
pub struct Classifier {
    overrides: BTreeMap<IssueKind, Severity>,
    include_suggestions: bool,
}

impl Classifier {
    pub fn new(config: &MatchConfig) -> Self {
        let mut overrides = BTreeMap::new();
        for (key, severity) in &config.severity_overrides {
            match key.parse::<IssueKind>() {
                Ok(kind) => {
                    overrides.insert(kind, *severity);
                }
                Err(_) => tracing::debug!(key = %key, "ignoring unknown severity override"),
            }
        }
        Self {
            overrides,
            include_suggestions: config.include_suggestions,
        }
    }

    /// Configured severity for `kind`, else its default.
    pub fn severity_for(&self, kind: IssueKind) -> Severity {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_severity())
    }

    pub fn classify(&self, discrepancies: &[RawDiscrepancy]) -> IssueSet {
        let mut seen: HashSet<(IssueKind, &str, Option<&SourceLocation>, Option<&SourceLocation>)> =
            HashSet::new();
        let mut issues = Vec::with_capacity(discrepancies.len());

        for d in discrepancies {
            let identity = (
                d.kind,
                d.subject.as_str(),
                d.code_location.as_ref(),
                d.doc_location.as_ref(),
            );
            if !seen.insert(identity) {
                continue;
            }
            issues.push(Issue {
                kind: d.kind,
                severity: self.severity_for(d.kind),
                subject_name: d.subject.clone(),
                code_location: d.code_location.clone(),
                doc_location: d.doc_location.clone(),
                message: message_for(d),
                suggestion: if self.include_suggestions {
                    suggestion_for(d)
                } else {
                    None
                },
            });
        }

        // Stable: equal (file, severity) keep discrepancy order.
        issues.sort_by(|a, b| {
            a.file_path()
                .cmp(&b.file_path())
                .then_with(|| b.severity.cmp(&a.severity))
        });

        IssueSet::new(issues)
    }
}

/// Classify with a one-off [`Classifier`] built from `config`.
pub fn classify(discrepancies: &[RawDiscrepancy], config: &MatchConfig) -> IssueSet {
    Classifier::new(config).classify(discrepancies)
}
