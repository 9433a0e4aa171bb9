use docdrift_core::issues::IssueKind;
use docdrift_core::types::{Side, SignatureKind};

use crate::types::{Detail, RawDiscrepancy};

/// Human-readable message for a discrepancy.
pub fn message_for(d: &RawDiscrepancy) -> String {
    let label = label(d.signature_kind);
    let name = &d.subject;
    match (&d.kind, &d.detail) {
        (IssueKind::UndocumentedFunction, _) => format!("{label} '{name}' is not documented"),
        (IssueKind::MissingFromCode, _) => {
            format!("Documented {} '{name}' not found in code", d.signature_kind)
        }
        (IssueKind::ParameterMismatch, Detail::Parameters { undocumented, stale }) => {
            parameter_message(name, undocumented, stale)
        }
        (IssueKind::ParameterMismatch, _) => format!("Parameters of '{name}' differ from docs"),
        (IssueKind::MissingDeprecationNotice, _) => {
            format!("'{name}' is deprecated in code but the docs do not say so")
        }
        (IssueKind::StaleDeprecationNotice, _) => {
            format!("'{name}' is marked deprecated in docs but not in code")
        }
        (IssueKind::MissingDocstring, _) => format!("{label} '{name}' has no docstring"),
        (IssueKind::DuplicateDefinition, Detail::Duplicate { side, first }) => format!(
            "'{name}' is defined more than once in {}; first definition at {first}",
            side_noun(*side)
        ),
        (IssueKind::DuplicateDefinition, _) => format!("'{name}' is defined more than once"),
        (IssueKind::PossibleRename, Detail::Rename { code_name, doc_name, score }) => format!(
            "'{doc_name}' in docs looks like a rename of '{code_name}' (similarity {score:.2})"
        ),
        (IssueKind::PossibleRename, _) => format!("'{name}' may have been renamed"),
    }
}

/// Fix hint for a discrepancy. Parameter names are listed alphabetically.
pub fn suggestion_for(d: &RawDiscrepancy) -> Option<String> {
    let name = &d.subject;
    let hint = match (&d.kind, &d.detail) {
        (IssueKind::UndocumentedFunction, _) => match d.signature_kind {
            SignatureKind::Class => format!("Add documentation for class {name}"),
            _ => format!("Add documentation for {name}() in your docs"),
        },
        (IssueKind::MissingFromCode, _) => format!(
            "Remove or update documentation for '{name}'; it may have been renamed or deleted"
        ),
        (IssueKind::ParameterMismatch, Detail::Parameters { undocumented, stale }) => {
            let mut parts = Vec::new();
            if !undocumented.is_empty() {
                parts.push(format!(
                    "Add documentation for parameters: {}",
                    undocumented.join(", ")
                ));
            }
            if !stale.is_empty() {
                parts.push(format!(
                    "Remove documentation for deleted parameters: {}",
                    stale.join(", ")
                ));
            }
            if parts.is_empty() {
                return None;
            }
            parts.join(". ")
        }
        (IssueKind::ParameterMismatch, _) => return None,
        (IssueKind::MissingDeprecationNotice, _) => {
            format!("Add a deprecation notice for '{name}' to the docs")
        }
        (IssueKind::StaleDeprecationNotice, _) => format!(
            "Add a deprecation decorator to '{name}' or drop the notice from the docs"
        ),
        (IssueKind::MissingDocstring, _) => format!("Add a docstring to '{name}'"),
        (IssueKind::DuplicateDefinition, Detail::Duplicate { side, .. }) => match side {
            Side::Code => format!("Rename or remove one of the definitions of '{name}'"),
            Side::Doc => format!("Merge the duplicate documentation sections for '{name}'"),
        },
        (IssueKind::DuplicateDefinition, _) => {
            format!("Rename or remove one of the definitions of '{name}'")
        }
        (IssueKind::PossibleRename, Detail::Rename { code_name, doc_name, .. }) => {
            format!("Update the docs to use '{code_name}' instead of '{doc_name}'")
        }
        (IssueKind::PossibleRename, _) => return None,
    };
    Some(hint)
}

fn parameter_message(name: &str, undocumented: &[String], stale: &[String]) -> String {
    match (undocumented.is_empty(), stale.is_empty()) {
        (false, true) => format!(
            "Parameters [{}] not documented for '{name}'",
            undocumented.join(", ")
        ),
        (true, false) => format!(
            "Documented parameters [{}] don't exist in '{name}'",
            stale.join(", ")
        ),
        _ => format!(
            "Parameters [{}] not documented and documented parameters [{}] don't exist in '{name}'",
            undocumented.join(", "),
            stale.join(", ")
        ),
    }
}

fn label(kind: SignatureKind) -> &'static str {
    match kind {
        SignatureKind::Function => "Function",
        SignatureKind::Method => "Method",
        SignatureKind::Class => "Class",
    }
}

fn side_noun(side: Side) -> &'static str {
    match side {
        Side::Code => "code",
        Side::Doc => "the docs",
    }
}
