/// Per-file statistics: the `FileStatsAnalyzer`.
///
/// All counters are collected in a single streaming pass over the file.
/// The header row is read first and never counted as data.
use crate::analysis::filter::{MatchFilter, ResolvedFilter};
use crate::error::AnalysisError;
use crate::model::{AnalysisResult, MatchCounts, Row};
use compact_str::CompactString;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Analyses tab-delimited files for one primary column and an optional
/// `COLUMN=VALUE` match filter.
#[derive(Debug, Clone)]
pub struct FileStatsAnalyzer {
    primary_column: usize,
    match_spec: Option<String>,
}

impl FileStatsAnalyzer {
    /// `primary_column` is 1-based. `match_spec` is the raw filter text; it
    /// is validated per file and skipped with a warning when malformed.
    pub fn new(primary_column: usize, match_spec: Option<String>) -> Self {
        Self {
            primary_column,
            match_spec,
        }
    }

    /// Open and analyse the file at `path`.
    pub fn analyze(&self, path: &Path) -> Result<AnalysisResult, AnalysisError> {
        info!(
            "Processing file: {}, Column: {}, Matching column context: {}",
            path.display(),
            self.primary_column,
            self.match_spec.as_deref().unwrap_or("None"),
        );

        let file = File::open(path).map_err(|source| AnalysisError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.analyze_reader(path, BufReader::new(file))
    }

    /// Analyse already-open input. `path` is only used for identity and
    /// error messages.
    pub fn analyze_reader<R: BufRead>(
        &self,
        path: &Path,
        reader: R,
    ) -> Result<AnalysisResult, AnalysisError> {
        let mut lines = reader.lines();
        let mut line_no: u64 = 1;
        let read_err = |line: u64| {
            move |source: std::io::Error| AnalysisError::Read {
                path: path.to_path_buf(),
                line,
                source,
            }
        };

        let header_line = match lines.next() {
            Some(line) => line.map_err(read_err(line_no))?,
            None => return Err(AnalysisError::EmptyFile(path.to_path_buf())),
        };
        let header = Row::parse(&header_line);

        let primary_header = header.cell(self.primary_column).ok_or_else(|| {
            AnalysisError::PrimaryColumnOutOfRange {
                path: path.to_path_buf(),
                column: self.primary_column,
                header_columns: header.len(),
            }
        })?;

        let filter = self.resolve_filter(&header);

        let mut counters = Counters::default();
        for line in lines {
            line_no += 1;
            let line = line.map_err(read_err(line_no))?;
            counters.observe(&Row::parse(&line), self.primary_column, filter.as_ref());
        }

        debug!(
            "{}: {} data rows, {} distinct rows, {} distinct primary values",
            path.display(),
            counters.total_lines,
            counters.row_identities.len(),
            counters.primary_values.len(),
        );

        let match_counts = filter.map(|f| MatchCounts {
            key: f.key(),
            matching: counters.matching,
            non_matching: counters.non_matching,
        });

        Ok(counters.into_result(
            path,
            self.primary_column,
            CompactString::new(primary_header),
            header.len(),
            match_counts,
        ))
    }

    fn resolve_filter(&self, header: &Row<'_>) -> Option<ResolvedFilter> {
        let spec = self.match_spec.as_deref()?;
        match MatchFilter::parse(spec).and_then(|f| f.resolve(header)) {
            Ok(filter) => Some(filter),
            Err(e) => {
                warn!("Invalid format for -m argument. Please use COLUMN=VALUE. ({e})");
                None
            }
        }
    }
}

/// Analyse one file. Shorthand for `FileStatsAnalyzer::new(..).analyze(path)`.
pub fn analyze(
    path: &Path,
    primary_column: usize,
    match_spec: Option<&str>,
) -> Result<AnalysisResult, AnalysisError> {
    FileStatsAnalyzer::new(primary_column, match_spec.map(str::to_string)).analyze(path)
}

/// Running totals over the data rows of one file.
#[derive(Default)]
struct Counters {
    total_lines: u64,
    row_identities: HashSet<String>,
    blank: u64,
    separator_only: u64,
    empty_primary: u64,
    primary_values: HashSet<CompactString>,
    matching: u64,
    non_matching: u64,
}

impl Counters {
    fn observe(&mut self, row: &Row<'_>, primary_column: usize, filter: Option<&ResolvedFilter>) {
        self.total_lines += 1;
        self.row_identities.insert(row.identity());

        if row.is_blank() {
            self.blank += 1;
            if row.is_separator_only() {
                self.separator_only += 1;
            }
        }

        let value = row.value_or_empty(primary_column);
        if value.trim().is_empty() {
            self.empty_primary += 1;
        }
        if !self.primary_values.contains(value) {
            self.primary_values.insert(CompactString::new(value));
        }

        match filter.and_then(|f| f.classify(row)) {
            Some(true) => self.matching += 1,
            Some(false) => self.non_matching += 1,
            None => {}
        }
    }

    fn into_result(
        self,
        path: &Path,
        primary_column: usize,
        primary_header: CompactString,
        header_columns: usize,
        match_counts: Option<MatchCounts>,
    ) -> AnalysisResult {
        let unique_lines = self.row_identities.len() as u64;
        let unique_values = self.primary_values.len() as u64;

        AnalysisResult {
            file_name: path.display().to_string(),
            primary_context_column: primary_column,
            primary_context_column_header: primary_header,
            total_header_columns: header_columns,
            total_lines: self.total_lines,
            total_unique_lines_in_file: unique_lines,
            total_duplicate_lines_in_file: self.total_lines - unique_lines,
            total_number_of_blank_lines_no_text: self.blank,
            total_number_of_rows_with_no_data_but_only_field_separators: self.separator_only,
            total_empty_for_column_in_context: self.empty_primary,
            total_unique_rows_for_context_column: unique_values,
            // Keeps the historical off-by-one; see `AnalysisResult`.
            total_duplicate_rows_for_context_column: self.total_lines as i64
                - unique_values as i64
                - 1,
            matching_context_column_key: match_counts.as_ref().map(|m| m.key.clone()),
            count_matching_context_value: match_counts.as_ref().map(|m| m.matching),
            count_non_matching_context_value: match_counts.map(|m| m.non_matching),
        }
    }
}
