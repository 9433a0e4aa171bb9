use serde::{Deserialize, Serialize};

use docdrift_core::issues::IssueKind;
use docdrift_core::types::{CodeSignature, DocSignature, Side, Signature, SignatureKind, SourceLocation};

/// A signature that passed name resolution, with its comparison key.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T> {
    pub key: String,
    pub item: T,
}

/// How a matched pair was formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Fuzzy { score: f64 },
}

/// A code signature, a doc signature, or both. A pair with neither side
/// cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchedPair {
    Both {
        key: String,
        code: CodeSignature,
        doc: DocSignature,
        how: MatchKind,
    },
    CodeOnly {
        key: String,
        code: CodeSignature,
    },
    DocOnly {
        key: String,
        doc: DocSignature,
    },
}

impl MatchedPair {
    pub fn key(&self) -> &str {
        match self {
            MatchedPair::Both { key, .. }
            | MatchedPair::CodeOnly { key, .. }
            | MatchedPair::DocOnly { key, .. } => key,
        }
    }

    pub fn code(&self) -> Option<&CodeSignature> {
        match self {
            MatchedPair::Both { code, .. } | MatchedPair::CodeOnly { code, .. } => Some(code),
            MatchedPair::DocOnly { .. } => None,
        }
    }

    pub fn doc(&self) -> Option<&DocSignature> {
        match self {
            MatchedPair::Both { doc, .. } | MatchedPair::DocOnly { doc, .. } => Some(doc),
            MatchedPair::CodeOnly { .. } => None,
        }
    }

    /// Location used for ordering: the code side when present, else the doc side.
    pub fn anchor(&self) -> &SourceLocation {
        match self {
            MatchedPair::Both { code, .. } | MatchedPair::CodeOnly { code, .. } => {
                &code.signature.location
            }
            MatchedPair::DocOnly { doc, .. } => &doc.signature.location,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchedPair::Both { .. })
    }
}

/// A later signature sharing a comparison key with an earlier one on the same side.
#[derive(Debug, Clone, PartialEq)]
pub struct Duplicate {
    pub key: String,
    pub side: Side,
    pub first: SourceLocation,
    pub duplicate: Signature,
}

/// Matcher output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    pub pairs: Vec<MatchedPair>,
    pub duplicates: Vec<Duplicate>,
}

/// Kind-specific facts the classifier turns into message and suggestion text.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    None,
    Parameters {
        /// Present in code but not documented. Sorted.
        undocumented: Vec<String>,
        /// Documented but absent in code. Sorted.
        stale: Vec<String>,
    },
    Duplicate {
        side: Side,
        first: SourceLocation,
    },
    Rename {
        code_name: String,
        doc_name: String,
        score: f64,
    },
}

/// A discrepancy found by the differ, before severity and wording are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDiscrepancy {
    pub kind: IssueKind,
    pub subject: String,
    pub signature_kind: SignatureKind,
    pub code_location: Option<SourceLocation>,
    pub doc_location: Option<SourceLocation>,
    pub detail: Detail,
}

impl RawDiscrepancy {
    /// Location used for ordering before classification.
    pub fn anchor(&self) -> Option<&SourceLocation> {
        self.code_location.as_ref().or(self.doc_location.as_ref())
    }
}
