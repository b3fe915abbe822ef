//! TabSleuth — descriptive statistics for tab-delimited files.
//!
//! Thin binary entry point. All logic lives in the `tabsleuth-core`
//! and `tabsleuth-cli` crates.

use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> anyhow::Result<ExitCode> {
    let start = Instant::now();
    let cli = tabsleuth_cli::Cli::parse();

    // Initialise structured logging.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = cli.into_config()?;
    let summary = tabsleuth_cli::run(&config)?;

    let mut stdout = std::io::stdout().lock();
    tabsleuth_cli::print_results(&mut stdout, &summary.results, start.elapsed())?;

    if summary.has_failures() {
        tracing::warn!("{} file(s) could not be analysed", summary.failures.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
