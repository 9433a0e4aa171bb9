use globset::{Glob, GlobSet, GlobSetBuilder};

use docdrift_core::config::MatchConfig;
use docdrift_core::error::DriftError;
use docdrift_core::types::{HasSignature, Signature};

use crate::types::Keyed;

/// Decides which signatures take part in matching and computes their
/// comparison keys.
///
/// Patterns are compiled once, when the resolver is built.
#[derive(Debug, Clone)]
pub struct NameResolver {
    exclude: GlobSet,
    ignore: GlobSet,
}

impl NameResolver {
    pub fn new(config: &MatchConfig) -> Result<Self, DriftError> {
        let mut exclude = GlobSetBuilder::new();
        for pattern in &config.exclude {
            for glob in exclude_globs(pattern) {
                exclude.add(compile(&glob, pattern)?);
            }
        }

        let mut ignore = GlobSetBuilder::new();
        for pattern in &config.ignore_patterns {
            ignore.add(compile(pattern, pattern)?);
        }

        Ok(Self {
            exclude: build(exclude)?,
            ignore: build(ignore)?,
        })
    }

    /// True if `path` matches an exclude pattern.
    pub fn is_excluded(&self, path: &str) -> bool {
        !self.exclude.is_empty() && self.exclude.is_match(normalize_path(path))
    }

    /// True if the bare `name` matches an ignore pattern.
    pub fn is_ignored(&self, name: &str) -> bool {
        !self.ignore.is_empty() && self.ignore.is_match(name)
    }

    /// Filter out excluded and ignored signatures and attach comparison keys.
    /// Input order is preserved.
    pub fn resolve<T: HasSignature>(&self, signatures: Vec<T>) -> Vec<Keyed<T>> {
        signatures
            .into_iter()
            .filter(|item| {
                let sig = item.signature();
                !self.is_excluded(&sig.location.file_path) && !self.is_ignored(&sig.name)
            })
            .map(|item| Keyed {
                key: comparison_key(item.signature()),
                item,
            })
            .collect()
    }
}

/// Resolve with a one-off resolver built from `config`.
pub fn resolve<T: HasSignature>(
    signatures: Vec<T>,
    config: &MatchConfig,
) -> Result<Vec<Keyed<T>>, DriftError> {
    Ok(NameResolver::new(config)?.resolve(signatures))
}

/// Lowercase `parent.name` when a parent is present, else lowercase `name`.
pub fn comparison_key(sig: &Signature) -> String {
    sig.qualified_name().to_lowercase()
}

fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

/// A bare pattern like `node_modules` matches any path component equal to it.
fn exclude_globs(pattern: &str) -> Vec<String> {
    let pattern = normalize_path(pattern).trim_end_matches('/').to_string();
    if has_glob_meta(&pattern) {
        return vec![pattern];
    }
    vec![
        pattern.clone(),
        format!("{pattern}/**"),
        format!("**/{pattern}"),
        format!("**/{pattern}/**"),
    ]
}

fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    unified.trim_start_matches("./").to_string()
}

fn compile(glob: &str, original: &str) -> Result<Glob, DriftError> {
    Glob::new(glob).map_err(|e| DriftError::InvalidPattern {
        pattern: original.to_string(),
        reason: e.to_string(),
    })
}

fn build(builder: GlobSetBuilder) -> Result<GlobSet, DriftError> {
    builder.build().map_err(|e| DriftError::InvalidPattern {
        pattern: String::new(),
        reason: e.to_string(),
    })
}
