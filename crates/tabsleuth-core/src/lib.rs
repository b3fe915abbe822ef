/// TabSleuth Core — statistics for tab-delimited files.
///
/// This crate contains all analysis logic with zero CLI dependencies.
///
/// # Modules
///
/// - [`model`] — Split rows and the per-file `AnalysisResult` record.
/// - [`analysis`] — The `FileStatsAnalyzer` and `COLUMN=VALUE` match filters.
/// - [`discovery`] — Sorted listing of a directory's input files.
/// - [`report`] — CSV report writer and console rendering.
/// - [`config`] — The explicit run configuration.
/// - [`error`] — Typed errors for each stage.
pub mod analysis;
pub mod config;
pub mod discovery;
pub mod error;
pub mod model;
pub mod report;

pub use analysis::{analyze, FileStatsAnalyzer};
pub use config::{InputSource, RunConfig};
pub use error::{AnalysisError, DiscoveryError, FilterError, ReportError};
pub use model::AnalysisResult;
