//! Report formatters for docdrift issue sets.
//!
//! Provides four output modes:
//! - **Markdown** (default): summary table and issues grouped by file
//! - **JSON** (`--format json`): the `IssueSet` as pretty-printed JSON
//! - **GitHub** (`--format github`): GitHub Actions workflow annotations
//! - **PR comment** (`--format pr`): compact body for a pull-request comment

pub mod github;
pub mod json;
pub mod markdown;
pub mod pr_comment;

use std::str::FromStr;

use docdrift_core::issues::{Issue, IssueSet, Severity};

pub trait OutputFormatter {
    fn format_report(&self, set: &IssueSet) -> String;
}

/// Filter applied to an `IssueSet` before any formatter sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub min_severity: Severity,
    pub max_issues: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            min_severity: Severity::Info,
            max_issues: None,
        }
    }
}

impl ReportOptions {
    /// Drops issues below `min_severity`, then truncates to `max_issues`.
    ///
    /// The summary counts every issue that passed the severity filter, so a
    /// truncated set has `summary.total > issues.len()`.
    pub fn apply(&self, set: &IssueSet) -> IssueSet {
        let mut filtered = set.filtered(self.min_severity);
        if let Some(max) = self.max_issues {
            filtered.issues.truncate(max);
        }
        filtered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
    Github,
    PrComment,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
            ReportFormat::Github => "github",
            ReportFormat::PrComment => "pr",
        }
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            ReportFormat::Markdown => Box::new(markdown::MarkdownFormatter::new()),
            ReportFormat::Json => Box::new(json::JsonFormatter),
            ReportFormat::Github => Box::new(github::GithubFormatter),
            ReportFormat::PrComment => Box::new(pr_comment::PrCommentFormatter::new()),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "github" => Ok(ReportFormat::Github),
            "pr" | "pr-comment" => Ok(ReportFormat::PrComment),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// Issues the formatter received but could not show after truncation.
pub(crate) fn hidden_count(set: &IssueSet) -> usize {
    (set.summary.total as usize).saturating_sub(set.issues.len())
}

/// `file:line` of the issue's primary location, or `None` with no location.
pub(crate) fn primary_location(issue: &Issue) -> Option<String> {
    issue
        .file_path()
        .map(|file| format!("{}:{}", file, issue.line().unwrap_or(1)))
}

#[cfg(test)]
pub(crate) mod test_fixtures;
