use std::path::Path;
use std::str::FromStr;

use docdrift_core::config::{DriftConfig, MatchConfig};
use docdrift_core::issues::{IssueSet, Severity};
use docdrift_engine::{DriftEngine, TokenSimilarity};
use docdrift_output::pr_comment::PrCommentFormatter;
use docdrift_output::{OutputFormatter, ReportFormat, ReportOptions};
use docdrift_parsers::SignatureCollector;

use crate::cli_args::CheckArgs;

/// Run `docdrift check <code_path> <docs_path>`.
pub fn run(args: &CheckArgs) -> i32 {
    let file_config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("docdrift check: {}", e);
            return 2;
        }
    };
    let (match_config, options) = layer_flags(&file_config, args);

    for (label, path) in [("code", &args.code_path), ("docs", &args.docs_path)] {
        if !path.exists() {
            eprintln!("docdrift check: {} path does not exist: {}", label, path.display());
            return 2;
        }
    }

    let fuzzy = match_config.enable_fuzzy_matching;
    let mut engine = match DriftEngine::new(match_config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("docdrift check: {}", e);
            return 2;
        }
    };
    if fuzzy {
        engine = engine.with_similarity(Box::new(TokenSimilarity::default()));
    }

    let collector = SignatureCollector::with_defaults();
    tracing::info!(path = %args.code_path.display(), "scanning code");
    let code = collector.collect_code(&args.code_path);
    tracing::info!(path = %args.docs_path.display(), "scanning docs");
    let docs = collector.collect_docs(&args.docs_path);
    tracing::info!(code = code.len(), docs = docs.len(), "extracted signatures");

    let set = match engine.run(code, docs) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("docdrift check: {}", e);
            return 2;
        }
    };

    let format = resolve_format(args);
    let report = formatter_for(format).format_report(&options.apply(&set));

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &report) {
                eprintln!("docdrift check: failed to write {}: {}", path.display(), e);
                return 2;
            }
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{}", report.trim_end()),
    }

    exit_code(&set, &args.fail_on)
}

/// Explicit `--config` must load; otherwise `./.docdrift.json` (or `./.drift.json`) is optional.
fn load_config(explicit: Option<&Path>) -> Result<DriftConfig, String> {
    match explicit {
        Some(path) => DriftConfig::load_file(path).map_err(|e| e.to_string()),
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| format!("failed to get current directory: {}", e))?;
            DriftConfig::load(&cwd).map_err(|e| e.to_string())
        }
    }
}

/// CLI flags on top of the config file.
pub(crate) fn layer_flags(config: &DriftConfig, args: &CheckArgs) -> (MatchConfig, ReportOptions) {
    let mut match_config = config.match_config();
    match_config.exclude.extend(args.exclude.iter().cloned());
    if args.no_suggestions {
        match_config.include_suggestions = false;
    }
    if args.no_docstrings {
        match_config.require_docstrings = false;
    }
    if args.fuzzy {
        match_config.enable_fuzzy_matching = true;
    }

    let min_severity = args
        .min_severity
        .as_deref()
        .and_then(|s| Severity::from_str(s).ok())
        .unwrap_or(config.report.min_severity);
    let options = ReportOptions {
        min_severity,
        max_issues: config.report.max_issues,
    };
    (match_config, options)
}

/// `--format` wins; otherwise a `.json` output file implies JSON.
pub(crate) fn resolve_format(args: &CheckArgs) -> ReportFormat {
    if let Some(format) = args.format.as_deref().and_then(|f| ReportFormat::from_str(f).ok()) {
        return format;
    }
    let json_output = args
        .output
        .as_ref()
        .and_then(|p| p.extension())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if json_output {
        ReportFormat::Json
    } else {
        ReportFormat::Markdown
    }
}

/// PR comments link code locations when running inside GitHub Actions.
fn formatter_for(format: ReportFormat) -> Box<dyn OutputFormatter> {
    if format != ReportFormat::PrComment {
        return format.formatter();
    }
    let env = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
    match (env("GITHUB_SERVER_URL"), env("GITHUB_REPOSITORY"), env("GITHUB_SHA")) {
        (Some(server), Some(repo), Some(sha)) => Box::new(
            PrCommentFormatter::new().with_links(format!("{}/{}", server.trim_end_matches('/'), repo), sha),
        ),
        _ => format.formatter(),
    }
}

/// The fail-on decision uses every issue, not only the reported ones.
pub(crate) fn exit_code(set: &IssueSet, fail_on: &str) -> i32 {
    match Severity::from_str(fail_on) {
        Ok(threshold) if set.fails_at(threshold) => {
            tracing::info!(threshold = %threshold, "failing on drift at or above threshold");
            1
        }
        _ => 0,
    }
}
