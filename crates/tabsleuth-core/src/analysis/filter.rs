/// `COLUMN=VALUE` match filters.
///
/// Both sides must be integers. The column is 1-based; the value is compared
/// against cells as its canonical decimal text, so `3=05` matches cells
/// holding `5`.
use crate::error::FilterError;
use crate::model::Row;
use compact_str::CompactString;

/// A parsed, not yet resolved, match filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFilter {
    pub column: i64,
    pub value: i64,
}

impl MatchFilter {
    /// Parse a `COLUMN=VALUE` spec. Whitespace around either side is allowed.
    pub fn parse(spec: &str) -> Result<Self, FilterError> {
        let (col, val) = spec
            .split_once('=')
            .ok_or_else(|| FilterError::MissingSeparator(spec.to_string()))?;

        let column = col.trim().parse::<i64>().map_err(|_| FilterError::BadColumn {
            spec: spec.to_string(),
            side: col.to_string(),
        })?;
        let value = val.trim().parse::<i64>().map_err(|_| FilterError::BadValue {
            spec: spec.to_string(),
            side: val.to_string(),
        })?;

        Ok(Self { column, value })
    }

    /// Bind the filter to a file's header, naming the filter column.
    pub fn resolve(&self, header: &Row<'_>) -> Result<ResolvedFilter, FilterError> {
        let out_of_range = || FilterError::ColumnOutOfRange {
            column: self.column,
            header_columns: header.len(),
        };
        let column = usize::try_from(self.column).map_err(|_| out_of_range())?;
        let name = header.cell(column).ok_or_else(out_of_range)?;

        Ok(ResolvedFilter {
            column,
            header: CompactString::new(name),
            target: self.value.to_string(),
        })
    }
}

/// A filter bound to a concrete header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilter {
    column: usize,
    header: CompactString,
    target: String,
}

impl ResolvedFilter {
    /// `"<header name>=<target>"`, as reported.
    pub fn key(&self) -> String {
        format!("{}={}", self.header, self.target)
    }

    /// `Some(true)` if the row's filter cell equals the target,
    /// `Some(false)` if it differs, `None` if the row is too short.
    pub fn classify(&self, row: &Row<'_>) -> Option<bool> {
        row.cell(self.column).map(|cell| cell == self.target)
    }
}
