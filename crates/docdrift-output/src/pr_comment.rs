use crate::{hidden_count, primary_location, OutputFormatter};
use docdrift_core::issues::{Issue, IssueSet, Severity};

const MAX_CRITICAL: usize = 10;
const MAX_WARNINGS: usize = 20;

/// Pull-request comment body. Critical issues are always listed (capped),
/// warnings sit in a collapsible block, info issues only count.
pub struct PrCommentFormatter {
    /// Repository web URL, e.g. `https://github.com/org/repo`.
    pub repo_url: Option<String>,
    pub commit_sha: Option<String>,
}

impl PrCommentFormatter {
    pub fn new() -> Self {
        Self {
            repo_url: None,
            commit_sha: None,
        }
    }

    /// Link code locations to `{repo_url}/blob/{sha}/{file}#L{line}`.
    pub fn with_links(mut self, repo_url: impl Into<String>, commit_sha: impl Into<String>) -> Self {
        self.repo_url = Some(repo_url.into());
        self.commit_sha = Some(commit_sha.into());
        self
    }

    fn format_compact(&self, issue: &Issue) -> String {
        let icon = icon(issue.severity);
        let file_ref = match (&issue.code_location, &self.repo_url, &self.commit_sha) {
            (Some(code), Some(repo), Some(sha)) => format!(
                " ([code]({}/blob/{}/{}#L{}))",
                repo.trim_end_matches('/'),
                sha,
                code.file_path,
                code.line
            ),
            _ => primary_location(issue)
                .map(|loc| format!(" (`{loc}`)"))
                .unwrap_or_default(),
        };
        format!("- {icon} **{}**: {}{file_ref}", issue.subject_name, issue.message)
    }

    fn push_capped(&self, issues: &[&Issue], max: usize, lines: &mut Vec<String>) {
        for issue in issues.iter().take(max) {
            lines.push(self.format_compact(issue));
        }
        if issues.len() > max {
            lines.push(format!("*...and {} more*", issues.len() - max));
        }
    }
}

impl Default for PrCommentFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "❌",
        Severity::Warning => "⚠️",
        Severity::Info => "ℹ️",
    }
}

impl OutputFormatter for PrCommentFormatter {
    fn format_report(&self, set: &IssueSet) -> String {
        let s = &set.summary;
        let mut lines = Vec::new();

        let header = if s.critical > 0 {
            "## ❌ Documentation Drift Detected"
        } else if s.warning > 0 {
            "## ⚠️ Documentation Drift Warnings"
        } else {
            "## ✅ Documentation Up to Date"
        };
        lines.push(header.to_string());
        lines.push(String::new());

        lines.push("<details>".to_string());
        lines.push("<summary>📊 Summary</summary>".to_string());
        lines.push(String::new());
        lines.push("| Category | Count |".to_string());
        lines.push("|----------|-------|".to_string());
        lines.push(format!("| ❌ Critical | {} |", s.critical));
        lines.push(format!("| ⚠️ Warning | {} |", s.warning));
        lines.push(format!("| ℹ️ Info | {} |", s.info));
        lines.push(String::new());
        lines.push("</details>".to_string());
        lines.push(String::new());

        if set.issues.is_empty() && s.total == 0 {
            lines.push("No documentation drift detected. Great job! 🎉".to_string());
            lines.push(String::new());
            return lines.join("\n");
        }

        let critical: Vec<&Issue> = set
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .collect();
        if !critical.is_empty() {
            lines.push("### ❌ Critical Issues".to_string());
            lines.push(String::new());
            self.push_capped(&critical, MAX_CRITICAL, &mut lines);
            lines.push(String::new());
        }

        let warnings: Vec<&Issue> = set
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .collect();
        if !warnings.is_empty() {
            lines.push("<details>".to_string());
            lines.push(format!("<summary>⚠️ Warnings ({})</summary>", warnings.len()));
            lines.push(String::new());
            self.push_capped(&warnings, MAX_WARNINGS, &mut lines);
            lines.push(String::new());
            lines.push("</details>".to_string());
            lines.push(String::new());
        }

        let hidden = hidden_count(set);
        if hidden > 0 {
            lines.push(format!("*{hidden} issue(s) omitted by the report limit*"));
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push("*Generated by docdrift*".to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}
