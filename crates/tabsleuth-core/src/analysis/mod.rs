/// Analysis modules — per-file statistics and match filtering.

pub mod analyzer;
pub mod filter;

pub use analyzer::{analyze, FileStatsAnalyzer};
pub use filter::{MatchFilter, ResolvedFilter};
