//! docdrift CLI: detect when code and documentation drift out of sync.
//!
//! `docdrift check <code> <docs>` extracts signatures from both trees, runs the
//! drift engine and prints a report. `docdrift init` writes a default config.
//! Exit codes: 0 clean or below `--fail-on`, 1 drift at or above `--fail-on`,
//! 2 usage, configuration or IO error.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match cli.command {
        Commands::Check(args) => commands::check::run(&args),
        Commands::Init { force } => commands::init::run(force),
    };

    std::process::exit(exit_code);
}
