use std::collections::BTreeSet;

use docdrift_core::config::MatchConfig;
use docdrift_core::issues::IssueKind;
use docdrift_core::types::{CodeSignature, DocSignature, Side, Signature};

use crate::similarity::is_receiver;
use crate::types::{Detail, Duplicate, MatchKind, MatchedPair, RawDiscrepancy};

/// Raw discrepancies for one pair, in a fixed per-kind order.
pub fn diff(pair: &MatchedPair, config: &MatchConfig) -> Vec<RawDiscrepancy> {
    match pair {
        MatchedPair::CodeOnly { code, .. } => {
            let sig = &code.signature;
            if config.require_docstrings || sig.is_public() {
                vec![orphan(IssueKind::UndocumentedFunction, sig, true)]
            } else {
                vec![]
            }
        }
        MatchedPair::DocOnly { doc, .. } => {
            vec![orphan(IssueKind::MissingFromCode, &doc.signature, false)]
        }
        MatchedPair::Both { code, doc, how, .. } => diff_matched(code, doc, how, config),
    }
}

/// `DUPLICATE_DEFINITION` for a later signature the matcher set aside.
pub fn diff_duplicate(dup: &Duplicate) -> RawDiscrepancy {
    let sig = &dup.duplicate;
    let (code_location, doc_location) = match dup.side {
        Side::Code => (Some(sig.location.clone()), None),
        Side::Doc => (None, Some(sig.location.clone())),
    };
    RawDiscrepancy {
        kind: IssueKind::DuplicateDefinition,
        subject: sig.qualified_name(),
        signature_kind: sig.kind,
        code_location,
        doc_location,
        detail: Detail::Duplicate {
            side: dup.side,
            first: dup.first.clone(),
        },
    }
}

fn orphan(kind: IssueKind, sig: &Signature, code_side: bool) -> RawDiscrepancy {
    let location = Some(sig.location.clone());
    RawDiscrepancy {
        kind,
        subject: sig.qualified_name(),
        signature_kind: sig.kind,
        code_location: if code_side { location.clone() } else { None },
        doc_location: if code_side { None } else { location },
        detail: Detail::None,
    }
}

fn diff_matched(
    code: &CodeSignature,
    doc: &DocSignature,
    how: &MatchKind,
    config: &MatchConfig,
) -> Vec<RawDiscrepancy> {
    let c = &code.signature;
    let d = &doc.signature;
    let raw = |kind: IssueKind, detail: Detail| RawDiscrepancy {
        kind,
        subject: c.qualified_name(),
        signature_kind: c.kind,
        code_location: Some(c.location.clone()),
        doc_location: Some(d.location.clone()),
        detail,
    };

    let mut out = Vec::new();

    if let MatchKind::Fuzzy { score } = how {
        if !c.qualified_name().eq_ignore_ascii_case(&d.qualified_name()) {
            out.push(raw(
                IssueKind::PossibleRename,
                Detail::Rename {
                    code_name: c.qualified_name(),
                    doc_name: d.qualified_name(),
                    score: *score,
                },
            ));
        }
    }

    if config.check_parameters {
        let (undocumented, stale) = parameter_diff(c, d);
        if !undocumented.is_empty() || !stale.is_empty() {
            out.push(raw(
                IssueKind::ParameterMismatch,
                Detail::Parameters { undocumented, stale },
            ));
        }
    }

    match (c.is_deprecated, d.is_deprecated) {
        (true, false) => out.push(raw(IssueKind::MissingDeprecationNotice, Detail::None)),
        (false, true) => out.push(raw(IssueKind::StaleDeprecationNotice, Detail::None)),
        _ => {}
    }

    if config.require_docstrings && !code.docstring_present {
        out.push(raw(IssueKind::MissingDocstring, Detail::None));
    }

    out
}

/// `(in code only, in docs only)`, each sorted, receivers excluded.
/// Annotations and defaults are not compared.
pub fn parameter_diff(code: &Signature, doc: &Signature) -> (Vec<String>, Vec<String>) {
    let code_names: BTreeSet<&str> = code.parameter_names().filter(|n| !is_receiver(n)).collect();
    let doc_names: BTreeSet<&str> = doc.parameter_names().filter(|n| !is_receiver(n)).collect();

    let undocumented = code_names
        .difference(&doc_names)
        .map(|s| s.to_string())
        .collect();
    let stale = doc_names
        .difference(&code_names)
        .map(|s| s.to_string())
        .collect();
    (undocumented, stale)
}
