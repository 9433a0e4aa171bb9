//! Configuration for docdrift.
//!
//! [`MatchConfig`] is what the engine consumes: immutable for one run and passed
//! explicitly to every component. [`DriftConfig`] is the on-disk form read from
//! `.docdrift.json` (or the older `.drift.json`); every field falls back to a
//! default when absent.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::issues::Severity;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".docdrift.json";

/// Older config file name, read when [`CONFIG_FILE_NAME`] is absent.
pub const LEGACY_CONFIG_FILE_NAME: &str = ".drift.json";

pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.7;

/// Engine settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Path patterns; signatures declared in matching files are skipped.
    pub exclude: Vec<String>,
    /// Name globs; matching signatures are skipped.
    pub ignore_patterns: Vec<String>,
    pub require_docstrings: bool,
    pub check_parameters: bool,
    /// Issue-kind name (`PARAMETER_MISMATCH`) to severity. Unknown kinds are ignored.
    pub severity_overrides: BTreeMap<String, Severity>,
    pub enable_fuzzy_matching: bool,
    pub fuzzy_match_threshold: f64,
    pub include_suggestions: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            exclude: vec![],
            ignore_patterns: default_ignore_patterns(),
            require_docstrings: true,
            check_parameters: true,
            severity_overrides: BTreeMap::new(),
            enable_fuzzy_matching: false,
            fuzzy_match_threshold: DEFAULT_FUZZY_THRESHOLD,
            include_suggestions: true,
        }
    }
}

/// Top-level `.docdrift.json` contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftConfig {
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,
    #[serde(default = "default_true")]
    pub require_docstrings: bool,
    #[serde(default = "default_true")]
    pub check_parameters: bool,
    #[serde(default)]
    pub severity_overrides: BTreeMap<String, Severity>,
    #[serde(default)]
    pub fuzzy: FuzzyConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Fuzzy matching toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_fuzzy_threshold")]
    pub threshold: f64,
}

/// Reporting defaults the CLI applies unless overridden by flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub include_suggestions: bool,
    #[serde(default = "default_min_severity")]
    pub min_severity: Severity,
    #[serde(default)]
    pub max_issues: Option<usize>,
}

fn default_true() -> bool {
    true
}
fn default_ignore_patterns() -> Vec<String> {
    vec!["_*".to_string()]
}
fn default_fuzzy_threshold() -> f64 {
    DEFAULT_FUZZY_THRESHOLD
}
fn default_min_severity() -> Severity {
    Severity::Info
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: default_fuzzy_threshold(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_suggestions: true,
            min_severity: default_min_severity(),
            max_issues: None,
        }
    }
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            exclude: vec![],
            ignore_patterns: default_ignore_patterns(),
            require_docstrings: true,
            check_parameters: true,
            severity_overrides: BTreeMap::new(),
            fuzzy: FuzzyConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl DriftConfig {
    /// Load `.docdrift.json` from `dir`, falling back to `.drift.json`.
    /// When neither exists the defaults are used.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let found = [CONFIG_FILE_NAME, LEGACY_CONFIG_FILE_NAME]
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists());
        match found {
            Some(path) => Self::load_file(&path),
            None => {
                tracing::debug!(dir = %dir.display(), "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load an explicit config file. The file must exist and parse.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let cfg: DriftConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// The engine view of this configuration.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            exclude: self.exclude.clone(),
            ignore_patterns: self.ignore_patterns.clone(),
            require_docstrings: self.require_docstrings,
            check_parameters: self.check_parameters,
            severity_overrides: self.severity_overrides.clone(),
            enable_fuzzy_matching: self.fuzzy.enabled,
            fuzzy_match_threshold: self.fuzzy.threshold,
            include_suggestions: self.report.include_suggestions,
        }
    }
}
