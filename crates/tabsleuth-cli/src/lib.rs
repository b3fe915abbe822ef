/// TabSleuth CLI — command-line frontend.
///
/// Argument parsing and the batch runner live here. Analysis logic lives in
/// `tabsleuth-core`.
pub mod args;
pub mod runner;

pub use args::Cli;
pub use runner::{print_results, run, RunSummary};
