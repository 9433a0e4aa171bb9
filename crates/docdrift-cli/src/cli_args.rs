use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "docdrift",
    version,
    about = "Detect when code and documentation drift out of sync",
    after_help = "Examples:\n  docdrift check ./src ./docs\n  docdrift check ./src ./docs --format json -o report.json\n  docdrift check ./src ./docs --format github --fail-on critical"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug-level logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Compare code signatures against their documentation
    Check(CheckArgs),

    /// Write a default .docdrift.json to the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Source code directory or file
    pub code_path: PathBuf,

    /// Documentation directory or file
    pub docs_path: PathBuf,

    /// Report format (default: markdown, or json for a .json --output)
    #[arg(short, long, value_parser = ["markdown", "json", "github", "pr"])]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Lowest severity included in the report
    #[arg(long, value_parser = ["info", "warning", "critical"])]
    pub min_severity: Option<String>,

    /// Exit with code 1 when any issue is at or above this severity
    #[arg(long, default_value = "none", value_parser = ["info", "warning", "critical", "none"])]
    pub fail_on: String,

    /// Path pattern to exclude (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Omit fix suggestions
    #[arg(long)]
    pub no_suggestions: bool,

    /// Do not report undocumented private signatures or missing docstrings
    #[arg(long)]
    pub no_docstrings: bool,

    /// Pair unmatched signatures by name similarity
    #[arg(long)]
    pub fuzzy: bool,

    /// Config file (default: ./.docdrift.json or ./.drift.json when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
