/// Console rendering of results.
///
/// Results are printed as 4-space indented JSON, keys in report order,
/// absent filter fields as `null`.
use crate::error::ReportError;
use crate::model::AnalysisResult;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Pretty-print one result as JSON into `out`, without a trailing newline.
pub fn write_json<W: Write>(out: &mut W, result: &AnalysisResult) -> Result<(), ReportError> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(out, formatter);
    result.serialize(&mut ser)?;
    Ok(())
}

/// The closing timing line.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Total execution time: {} seconds", elapsed.as_secs_f64())
}
