/// Report output — the CSV summary file and console rendering.
pub mod console;
pub mod writer;

pub use console::{format_elapsed, write_json};
pub use writer::{write_report, DEFAULT_REPORT_PATH};
