use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DriftError;

/// What a signature declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureKind {
    Function,
    Method,
    Class,
}

impl SignatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureKind::Function => "function",
            SignatureKind::Method => "method",
            SignatureKind::Class => "class",
        }
    }
}

impl std::fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a signature was declared. Used for reporting and ordering only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: u32) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file_path, self.line)
    }
}

/// A single declared or documented parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Parameter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_annotation: None,
            default_value: None,
        }
    }
}

/// Fields shared by code-side and doc-side signatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub kind: SignatureKind,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub location: SourceLocation,
    /// Name of the enclosing class, for methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Signature {
    pub fn new(name: impl Into<String>, kind: SignatureKind, location: SourceLocation) -> Self {
        Self {
            name: name.into(),
            kind,
            parameters: Vec::new(),
            return_type: None,
            is_deprecated: false,
            location,
            parent: None,
        }
    }

    /// `Parent.name` for methods, `name` otherwise, in original case.
    pub fn qualified_name(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{parent}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Names starting with `_` are treated as private.
    pub fn is_public(&self) -> bool {
        !self.name.starts_with('_')
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }

    /// Reject signatures that break the model's invariants: an empty name or
    /// two parameters sharing a name.
    pub fn validate(&self) -> Result<(), DriftError> {
        if self.name.trim().is_empty() {
            return Err(self.malformed("empty name"));
        }
        let mut seen = HashSet::new();
        for param in &self.parameters {
            if !seen.insert(param.name.as_str()) {
                return Err(self.malformed(&format!("duplicate parameter `{}`", param.name)));
            }
        }
        Ok(())
    }

    fn malformed(&self, reason: &str) -> DriftError {
        DriftError::MalformedSignature {
            name: self.name.clone(),
            file: self.location.file_path.clone(),
            line: self.location.line,
            reason: reason.to_string(),
        }
    }
}

/// A signature extracted from source code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSignature {
    #[serde(flatten)]
    pub signature: Signature,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub docstring_present: bool,
}

impl CodeSignature {
    pub fn new(signature: Signature) -> Self {
        Self {
            signature,
            is_async: false,
            docstring_present: false,
        }
    }
}

/// A signature extracted from documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocSignature {
    #[serde(flatten)]
    pub signature: Signature,
}

impl DocSignature {
    pub fn new(signature: Signature) -> Self {
        Self { signature }
    }
}

/// Access to the shared signature fields of either side.
pub trait HasSignature {
    fn signature(&self) -> &Signature;
}

impl HasSignature for Signature {
    fn signature(&self) -> &Signature {
        self
    }
}

impl HasSignature for CodeSignature {
    fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl HasSignature for DocSignature {
    fn signature(&self) -> &Signature {
        &self.signature
    }
}

/// Which extraction collaborator produced a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Code,
    Doc,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Code => "code",
            Side::Doc => "doc",
        }
    }
}
