/// A single input line split into cells.
///
/// Rows borrow from the line they were parsed from, so scanning a file
/// allocates only for the values that are retained (unique-set keys).

/// Separator between cells of an input line.
pub const FIELD_SEPARATOR: char = '\t';

/// Separator used when joining cells into a row identity.
const IDENTITY_JOINER: &str = ",";

/// One line of a tab-delimited file.
///
/// Rows are not assumed to have uniform length. An empty line is a row with
/// zero cells; a line holding only separators is a row of empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    cells: Vec<&'a str>,
}

impl<'a> Row<'a> {
    /// Split `line` on the field separator. A trailing `\r` is ignored.
    pub fn parse(line: &'a str) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return Self { cells: Vec::new() };
        }
        Self {
            cells: line.split(FIELD_SEPARATOR).collect(),
        }
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at a 1-based column, or `None` if the row is too short.
    pub fn cell(&self, column: usize) -> Option<&'a str> {
        column
            .checked_sub(1)
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    /// Value of a 1-based column, with short rows contributing `""`.
    pub fn value_or_empty(&self, column: usize) -> &'a str {
        self.cell(column).unwrap_or("")
    }

    /// True when no cell holds any text. Whitespace counts as text.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// True for a blank row that still contains at least one separator's
    /// worth of cells, e.g. `"\t\t\t"`. An empty line is blank but not
    /// separator-only.
    pub fn is_separator_only(&self) -> bool {
        !self.is_empty() && self.is_blank()
    }

    /// Identity used for whole-row uniqueness: cells joined with a comma.
    pub fn identity(&self) -> String {
        self.cells.join(IDENTITY_JOINER)
    }
}
