use crate::OutputFormatter;
use docdrift_core::issues::IssueSet;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, set: &IssueSet) -> String {
        serde_json::to_string_pretty(set).unwrap_or_default()
    }
}
