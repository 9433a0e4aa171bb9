use std::path::{Path, PathBuf};

use rayon::prelude::*;

use docdrift_core::types::{CodeSignature, DocSignature, HasSignature};

use crate::extractor::{handles, CodeExtractor, DocExtractor, ExtractError};
use crate::markdown::MarkdownExtractor;
use crate::python::PythonExtractor;
use crate::rst::RstExtractor;
use crate::typescript::TypeScriptExtractor;
use crate::walker::FileWalker;

/// Registry of extractors, dispatched by file extension.
///
/// Files are read and extracted in parallel; the combined output is sorted by
/// `(file_path, line)` so results never depend on thread scheduling.
pub struct SignatureCollector {
    code: Vec<Box<dyn CodeExtractor>>,
    docs: Vec<Box<dyn DocExtractor>>,
}

impl SignatureCollector {
    /// An empty collector. Register extractors with `with_code`/`with_docs`.
    pub fn new() -> Self {
        Self {
            code: Vec::new(),
            docs: Vec::new(),
        }
    }

    /// Python and TypeScript/JavaScript code, Markdown and RST docs.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_code(Box::new(PythonExtractor::new()))
            .with_code(Box::new(TypeScriptExtractor::new()))
            .with_docs(Box::new(MarkdownExtractor::new()))
            .with_docs(Box::new(RstExtractor::new()))
    }

    pub fn with_code(mut self, extractor: Box<dyn CodeExtractor>) -> Self {
        self.code.push(extractor);
        self
    }

    pub fn with_docs(mut self, extractor: Box<dyn DocExtractor>) -> Self {
        self.docs.push(extractor);
        self
    }

    pub fn code_extractor_for(&self, path: &Path) -> Option<&dyn CodeExtractor> {
        self.code
            .iter()
            .find(|e| handles(e.extensions(), path))
            .map(|e| e.as_ref())
    }

    pub fn doc_extractor_for(&self, path: &Path) -> Option<&dyn DocExtractor> {
        self.docs
            .iter()
            .find(|e| handles(e.extensions(), path))
            .map(|e| e.as_ref())
    }

    /// Code signatures from every supported file under `root`.
    pub fn collect_code(&self, root: &Path) -> Vec<CodeSignature> {
        let files: Vec<PathBuf> = FileWalker::new(root)
            .walk()
            .into_iter()
            .filter(|p| self.code_extractor_for(p).is_some())
            .collect();

        let mut sigs: Vec<CodeSignature> = files
            .par_iter()
            .flat_map_iter(|path| {
                let Some(extractor) = self.code_extractor_for(path) else {
                    return Vec::new();
                };
                match read(path) {
                    Ok(content) => extractor.extract(path, &content),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping code file");
                        Vec::new()
                    }
                }
            })
            .collect();

        sort_by_location(&mut sigs);
        tracing::debug!(files = files.len(), signatures = sigs.len(), "collected code signatures");
        sigs
    }

    /// Doc signatures from every supported file under `root`.
    pub fn collect_docs(&self, root: &Path) -> Vec<DocSignature> {
        let files: Vec<PathBuf> = FileWalker::new(root)
            .walk()
            .into_iter()
            .filter(|p| self.doc_extractor_for(p).is_some())
            .collect();

        let mut sigs: Vec<DocSignature> = files
            .par_iter()
            .flat_map_iter(|path| {
                let Some(extractor) = self.doc_extractor_for(path) else {
                    return Vec::new();
                };
                match read(path) {
                    Ok(content) => extractor.extract(path, &content),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping doc file");
                        Vec::new()
                    }
                }
            })
            .collect();

        sort_by_location(&mut sigs);
        tracing::debug!(files = files.len(), signatures = sigs.len(), "collected doc signatures");
        sigs
    }
}

impl Default for SignatureCollector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn read(path: &Path) -> Result<String, ExtractError> {
    std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn sort_by_location<T: HasSignature>(sigs: &mut [T]) {
    sigs.sort_by(|a, b| a.signature().location.cmp(&b.signature().location));
}
