use std::path::{Path, PathBuf};

use docdrift_core::types::{CodeSignature, DocSignature};

use crate::treesitter::ParseError;

/// Produces code-side signatures for one language.
///
/// Implementors must be `Send + Sync` so they can be shared across rayon
/// parallel iterators. `extract` never fails: unparseable input yields an
/// empty vector and a logged warning.
pub trait CodeExtractor: Send + Sync {
    /// Canonical language name (e.g. "python").
    fn language(&self) -> &str;

    /// File extensions handled, without the leading dot.
    fn extensions(&self) -> &[&str];

    fn extract(&self, path: &Path, content: &str) -> Vec<CodeSignature>;
}

/// Produces doc-side signatures for one documentation format.
pub trait DocExtractor: Send + Sync {
    /// Format name (e.g. "markdown").
    fn language(&self) -> &str;

    fn extensions(&self) -> &[&str];

    fn extract(&self, path: &Path, content: &str) -> Vec<DocSignature>;
}

/// True if `path` has one of `extensions` (case-insensitive).
pub fn handles(extensions: &[&str], path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|h| h.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
