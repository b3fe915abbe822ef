/// The per-file analysis record.
///
/// Fields are declared in report order; `FIELD_NAMES` and `to_record` must
/// stay in step with the struct so the CSV header, CSV rows and the JSON
/// console dump all agree.
use compact_str::CompactString;
use serde::Serialize;

/// Report column names, in the fixed order every output uses.
pub const FIELD_NAMES: [&str; 15] = [
    "file_name",
    "primary_context_column",
    "primary_context_column_header",
    "total_header_columns",
    "total_lines",
    "total_unique_lines_in_file",
    "total_duplicate_lines_in_file",
    "total_number_of_blank_lines_no_text",
    "total_number_of_rows_with_no_data_but_only_field_separators",
    "total_empty_for_column_in_context",
    "total_unique_rows_for_context_column",
    "total_duplicate_rows_for_context_column",
    "matching_context_column_key",
    "count_matching_context_value",
    "count_non_matching_context_value",
];

/// Outcome of a well-formed match filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCounts {
    /// `"<filter column header>=<target value>"`.
    pub key: String,
    /// Rows whose filter cell equals the target.
    pub matching: u64,
    /// Rows whose filter cell differs from the target.
    /// Rows too short to have a filter cell are in neither count.
    pub non_matching: u64,
}

/// Statistics for one analysed file. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub file_name: String,
    pub primary_context_column: usize,
    pub primary_context_column_header: CompactString,
    pub total_header_columns: usize,
    /// Data rows, header excluded.
    pub total_lines: u64,
    pub total_unique_lines_in_file: u64,
    pub total_duplicate_lines_in_file: u64,
    pub total_number_of_blank_lines_no_text: u64,
    pub total_number_of_rows_with_no_data_but_only_field_separators: u64,
    pub total_empty_for_column_in_context: u64,
    pub total_unique_rows_for_context_column: u64,
    /// `total_lines - total_unique_rows_for_context_column - 1`.
    ///
    /// Known quirk: the extra `- 1` is kept for compatibility with existing
    /// reports, so this is `-1` when every primary value is distinct.
    pub total_duplicate_rows_for_context_column: i64,
    pub matching_context_column_key: Option<String>,
    pub count_matching_context_value: Option<u64>,
    pub count_non_matching_context_value: Option<u64>,
}

impl AnalysisResult {
    /// All fields as strings in `FIELD_NAMES` order. Absent filter fields
    /// become empty strings.
    pub fn to_record(&self) -> [String; 15] {
        fn opt<T: ToString>(v: &Option<T>) -> String {
            v.as_ref().map(ToString::to_string).unwrap_or_default()
        }

        [
            self.file_name.clone(),
            self.primary_context_column.to_string(),
            self.primary_context_column_header.to_string(),
            self.total_header_columns.to_string(),
            self.total_lines.to_string(),
            self.total_unique_lines_in_file.to_string(),
            self.total_duplicate_lines_in_file.to_string(),
            self.total_number_of_blank_lines_no_text.to_string(),
            self.total_number_of_rows_with_no_data_but_only_field_separators
                .to_string(),
            self.total_empty_for_column_in_context.to_string(),
            self.total_unique_rows_for_context_column.to_string(),
            self.total_duplicate_rows_for_context_column.to_string(),
            opt(&self.matching_context_column_key),
            opt(&self.count_matching_context_value),
            opt(&self.count_non_matching_context_value),
        ]
    }
}
