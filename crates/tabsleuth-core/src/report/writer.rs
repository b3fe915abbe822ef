/// CSV report writer.
///
/// One header row (`FIELD_NAMES`) followed by one row per result, in the
/// order given. The file is always truncated, never appended to.
use crate::error::ReportError;
use crate::model::{AnalysisResult, FIELD_NAMES};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Where the report goes unless configured otherwise.
pub const DEFAULT_REPORT_PATH: &str = "output/complete_analysis.csv";

/// Write `results` as CSV to `path`, creating parent directories as needed.
pub fn write_report(path: &Path, results: &[AnalysisResult]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let csv_err = |source: csv::Error| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    write_records(&mut writer, results).map_err(csv_err)?;
    writer.flush().map_err(|source| ReportError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} result(s) to {}", results.len(), path.display());
    Ok(())
}

/// Write the header and all records to an open CSV writer.
pub fn write_records<W: Write>(
    writer: &mut csv::Writer<W>,
    results: &[AnalysisResult],
) -> Result<(), csv::Error> {
    writer.write_record(FIELD_NAMES)?;
    for result in results {
        writer.write_record(result.to_record())?;
    }
    Ok(())
}
