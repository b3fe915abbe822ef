/// Error types for the core crate.
///
/// Each stage has its own enum so callers can tell a per-file failure
/// (which the batch runner skips past) from a run-level one.
use std::path::PathBuf;
use thiserror::Error;

/// Failure while analysing a single input file. Always fatal for that file.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading {path} at line {line}: {source}")]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is empty: no header row")]
    EmptyFile(PathBuf),

    #[error("primary column {column} is out of range for {path} ({header_columns} header columns)")]
    PrimaryColumnOutOfRange {
        path: PathBuf,
        column: usize,
        header_columns: usize,
    },
}

/// Failure while enumerating a directory's input files.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("cannot list {path}: {message}")]
    Walk { path: PathBuf, message: String },
}

/// Failure while writing the tabular report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot create report directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write report {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot flush report {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot render result as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A match-filter spec that cannot be applied. Never fatal: the analyser
/// logs it and carries on without the filter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid match spec {0:?}: expected COLUMN=VALUE")]
    MissingSeparator(String),

    #[error("invalid match spec {spec:?}: column {side:?} is not an integer")]
    BadColumn { spec: String, side: String },

    #[error("invalid match spec {spec:?}: value {side:?} is not an integer")]
    BadValue { spec: String, side: String },

    #[error("match column {column} is out of range ({header_columns} header columns)")]
    ColumnOutOfRange { column: i64, header_columns: usize },
}
