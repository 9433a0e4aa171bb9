use crate::OutputFormatter;
use docdrift_core::issues::{IssueSet, Severity};

/// GitHub Actions workflow commands: one annotation per issue, then a
/// collapsible summary group.
pub struct GithubFormatter;

fn level(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "error",
        Severity::Warning => "warning",
        Severity::Info => "notice",
    }
}

/// Workflow-command data escaping: `%`, CR and LF.
fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Property values additionally escape `:` and `,`.
fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}

impl OutputFormatter for GithubFormatter {
    fn format_report(&self, set: &IssueSet) -> String {
        let mut lines = Vec::new();

        for issue in &set.issues {
            let file = issue.file_path().unwrap_or("");
            let line = issue.line().unwrap_or(1);
            lines.push(format!(
                "::{} file={},line={},title={}::{}",
                level(issue.severity),
                escape_property(file),
                line,
                issue.kind,
                escape_data(&issue.message),
            ));
        }

        let s = &set.summary;
        lines.push(String::new());
        lines.push("::group::Documentation Drift Summary".to_string());
        lines.push(format!("Total issues: {}", s.total));
        lines.push(format!("Critical: {}", s.critical));
        lines.push(format!("Warnings: {}", s.warning));
        lines.push(format!("Info: {}", s.info));
        lines.push("::endgroup::".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
