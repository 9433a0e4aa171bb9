use std::collections::BTreeMap;

use crate::{hidden_count, OutputFormatter};
use docdrift_core::issues::{Issue, IssueSet, Severity};

pub struct MarkdownFormatter {
    pub title: String,
    /// Print the matcher's coverage counts under the summary table.
    pub show_stats: bool,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self {
            title: "Documentation Drift Report".to_string(),
            show_stats: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴",
        Severity::Warning => "🟡",
        Severity::Info => "🔵",
    }
}

fn format_issue(issue: &Issue, out: &mut Vec<String>) {
    out.push(format!(
        "- {} **{}**: {}",
        icon(issue.severity),
        issue.subject_name,
        issue.message
    ));

    let mut locations = Vec::new();
    if let Some(code) = &issue.code_location {
        locations.push(format!("Code: `{code}`"));
    }
    if let Some(doc) = &issue.doc_location {
        locations.push(format!("Doc: `{doc}`"));
    }
    if !locations.is_empty() {
        out.push(format!("  - Location: {}", locations.join(", ")));
    }

    if let Some(suggestion) = &issue.suggestion {
        out.push(format!("  - 💡 *{suggestion}*"));
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, set: &IssueSet) -> String {
        let mut lines = vec![format!("# {}", self.title), String::new()];

        let s = &set.summary;
        lines.push("## Summary".to_string());
        lines.push(String::new());
        lines.push("| Severity | Count |".to_string());
        lines.push("|----------|-------|".to_string());
        lines.push(format!("| 🔴 Critical | {} |", s.critical));
        lines.push(format!("| 🟡 Warning | {} |", s.warning));
        lines.push(format!("| 🔵 Info | {} |", s.info));
        lines.push(format!("| **Total** | **{}** |", s.total));
        lines.push(String::new());

        if self.show_stats && set.stats.code_signatures + set.stats.doc_signatures > 0 {
            let st = &set.stats;
            lines.push("### Coverage Stats".to_string());
            lines.push(String::new());
            lines.push(format!("- Code signatures: {}", st.code_signatures));
            lines.push(format!("- Documented signatures: {}", st.doc_signatures));
            lines.push(format!("- Matched: {}", st.matched));
            if st.fuzzy_matched > 0 {
                lines.push(format!("- Fuzzy matched: {}", st.fuzzy_matched));
            }
            lines.push(format!("- Undocumented: {}", st.code_only));
            lines.push(format!("- Missing from code: {}", st.doc_only));
            lines.push(String::new());
        }

        if set.issues.is_empty() {
            lines.push("## ✅ No Issues Found".to_string());
            lines.push(String::new());
            lines.push("Code and documentation are in sync!".to_string());
            lines.push(String::new());
            return lines.join("\n");
        }

        lines.push("## Issues".to_string());
        lines.push(String::new());

        let mut by_file: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
        for issue in &set.issues {
            by_file
                .entry(issue.file_path().unwrap_or("unknown"))
                .or_default()
                .push(issue);
        }
        for (file, issues) in by_file {
            lines.push(format!("### 📁 `{file}`"));
            lines.push(String::new());
            for issue in issues {
                format_issue(issue, &mut lines);
            }
            lines.push(String::new());
        }

        let hidden = hidden_count(set);
        if hidden > 0 {
            lines.push(format!("*...and {hidden} more issue(s) not shown*"));
            lines.push(String::new());
        }

        lines.join("\n")
    }
}
