/// Batch runner — analyses every input file in order and writes the report.
///
/// Files are processed one at a time. A file that cannot be analysed is
/// logged and skipped; the rest of the batch still runs and the report
/// holds one row per successful file.
use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tabsleuth_core::report::{format_elapsed, write_json, write_report};
use tabsleuth_core::{AnalysisError, AnalysisResult, FileStatsAnalyzer, RunConfig};
use tracing::{error, info, warn};

/// Outcome of one batch.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Results in input order.
    pub results: Vec<AnalysisResult>,
    /// Files that were skipped, with the reason.
    pub failures: Vec<(PathBuf, AnalysisError)>,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Resolve inputs, analyse each file and write the CSV report.
pub fn run(config: &RunConfig) -> anyhow::Result<RunSummary> {
    let files = config
        .input_files()
        .context("failed to resolve input files")?;
    if files.is_empty() {
        warn!("No .{} files to analyse", config.extension);
    }

    let analyzer = FileStatsAnalyzer::new(config.primary_column, config.match_spec.clone());
    let mut summary = RunSummary::default();

    for path in files {
        match analyzer.analyze(&path) {
            Ok(result) => summary.results.push(result),
            Err(e) => {
                error!("Skipping {}: {e}", path.display());
                summary.failures.push((path, e));
            }
        }
    }

    write_report(&config.output_path, &summary.results).with_context(|| {
        format!("failed to write report {}", config.output_path.display())
    })?;

    info!(
        "Analysed {} file(s), {} skipped",
        summary.results.len(),
        summary.failures.len()
    );
    Ok(summary)
}

/// Print every result as JSON followed by the elapsed-time line.
pub fn print_results<W: Write>(
    out: &mut W,
    results: &[AnalysisResult],
    elapsed: Duration,
) -> anyhow::Result<()> {
    for result in results {
        write_json(out, result)?;
        writeln!(out)?;
    }
    writeln!(out, "{}", format_elapsed(elapsed))?;
    Ok(())
}
