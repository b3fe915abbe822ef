/// Data model for TabSleuth.
///
/// A `Row` is one split line of an input file; an `AnalysisResult` is the
/// fixed-shape record produced once per analysed file.
pub mod result;
pub mod row;

pub use result::{AnalysisResult, MatchCounts, FIELD_NAMES};
pub use row::Row;
