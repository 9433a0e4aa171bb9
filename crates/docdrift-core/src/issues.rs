use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::SourceLocation;

/// Ranked issue severity. Ordering is `Info < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    /// All severities, most severe first.
    pub fn descending() -> [Severity; 3] {
        [Severity::Critical, Severity::Warning, Severity::Info]
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

/// The kinds of drift the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    UndocumentedFunction,
    MissingFromCode,
    ParameterMismatch,
    MissingDeprecationNotice,
    StaleDeprecationNotice,
    MissingDocstring,
    DuplicateDefinition,
    PossibleRename,
}

impl IssueKind {
    pub const ALL: [IssueKind; 8] = [
        IssueKind::UndocumentedFunction,
        IssueKind::MissingFromCode,
        IssueKind::ParameterMismatch,
        IssueKind::MissingDeprecationNotice,
        IssueKind::StaleDeprecationNotice,
        IssueKind::MissingDocstring,
        IssueKind::DuplicateDefinition,
        IssueKind::PossibleRename,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::UndocumentedFunction => "UNDOCUMENTED_FUNCTION",
            IssueKind::MissingFromCode => "MISSING_FROM_CODE",
            IssueKind::ParameterMismatch => "PARAMETER_MISMATCH",
            IssueKind::MissingDeprecationNotice => "MISSING_DEPRECATION_NOTICE",
            IssueKind::StaleDeprecationNotice => "STALE_DEPRECATION_NOTICE",
            IssueKind::MissingDocstring => "MISSING_DOCSTRING",
            IssueKind::DuplicateDefinition => "DUPLICATE_DEFINITION",
            IssueKind::PossibleRename => "POSSIBLE_RENAME",
        }
    }

    pub fn default_severity(&self) -> Severity {
        match self {
            IssueKind::UndocumentedFunction => Severity::Warning,
            IssueKind::MissingFromCode => Severity::Warning,
            IssueKind::ParameterMismatch => Severity::Critical,
            IssueKind::MissingDeprecationNotice => Severity::Warning,
            IssueKind::StaleDeprecationNotice => Severity::Info,
            IssueKind::MissingDocstring => Severity::Info,
            IssueKind::DuplicateDefinition => Severity::Warning,
            IssueKind::PossibleRename => Severity::Info,
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = String;

    /// Accepts `PARAMETER_MISMATCH` as well as `parameter_mismatch`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        IssueKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == upper)
            .ok_or_else(|| format!("unknown issue kind: {s}"))
    }
}

/// One reported discrepancy. Built once by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub subject_name: String,
    pub code_location: Option<SourceLocation>,
    pub doc_location: Option<SourceLocation>,
    pub message: String,
    pub suggestion: Option<String>,
}

impl Issue {
    /// File the issue is grouped under: code location first, then doc location.
    pub fn file_path(&self) -> Option<&str> {
        self.code_location
            .as_ref()
            .or(self.doc_location.as_ref())
            .map(|l| l.file_path.as_str())
    }

    /// Line paired with [`Issue::file_path`].
    pub fn line(&self) -> Option<u32> {
        self.code_location
            .as_ref()
            .or(self.doc_location.as_ref())
            .map(|l| l.line)
    }
}

/// Issue counts per severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: u32,
    pub critical: u32,
    pub warning: u32,
    pub info: u32,
}

impl Summary {
    pub fn count(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}

/// Coverage counters for one engine run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub code_signatures: u32,
    pub doc_signatures: u32,
    pub matched: u32,
    pub fuzzy_matched: u32,
    pub code_only: u32,
    pub doc_only: u32,
    pub duplicates: u32,
}

/// Ordered result of one engine run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSet {
    pub issues: Vec<Issue>,
    pub summary: Summary,
    #[serde(default)]
    pub stats: MatchStats,
}

impl IssueSet {
    pub fn new(issues: Vec<Issue>) -> Self {
        let summary = summarize(&issues);
        Self {
            issues,
            summary,
            stats: MatchStats::default(),
        }
    }

    pub fn with_stats(mut self, stats: MatchStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }

    pub fn has_critical(&self) -> bool {
        self.summary.critical > 0
    }

    /// True if any issue is at or above `threshold`.
    pub fn fails_at(&self, threshold: Severity) -> bool {
        self.issues.iter().any(|i| i.severity >= threshold)
    }

    /// Copy keeping only issues at or above `min`, summary recomputed.
    pub fn filtered(&self, min: Severity) -> IssueSet {
        let issues: Vec<Issue> = self
            .issues
            .iter()
            .filter(|i| i.severity >= min)
            .cloned()
            .collect();
        IssueSet::new(issues).with_stats(self.stats.clone())
    }
}

fn summarize(issues: &[Issue]) -> Summary {
    let mut summary = Summary::default();
    for issue in issues {
        summary.total += 1;
        match issue.severity {
            Severity::Critical => summary.critical += 1,
            Severity::Warning => summary.warning += 1,
            Severity::Info => summary.info += 1,
        }
    }
    summary
}
