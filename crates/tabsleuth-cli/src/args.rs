/// Command-line arguments.
///
/// Exactly one of `-f/--filename` and `-d/--directory` is required; clap
/// rejects anything else before analysis starts.
use clap::builder::RangedU64ValueParser;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tabsleuth_core::discovery::DEFAULT_EXTENSION;
use tabsleuth_core::report::DEFAULT_REPORT_PATH;
use tabsleuth_core::{InputSource, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "tabsleuth")]
#[command(about = "Row counts, duplicates, blank lines and per-column value statistics for tab-delimited files")]
#[command(version)]
#[command(group(ArgGroup::new("input").required(true).args(["filename", "directory"])))]
pub struct Cli {
    #[arg(
        short = 'c',
        long = "primary_context_column",
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        help = "1-based column to profile"
    )]
    pub primary_context_column: usize,

    #[arg(
        short = 'm',
        long = "matching_context_column",
        value_name = "COLUMN=VALUE",
        help = "Count rows whose COLUMN equals VALUE (both integers); attach specs starting with '-', e.g. -m=-1=5"
    )]
    pub matching_context_column: Option<String>,

    #[arg(short = 'f', long, value_name = "PATH", help = "Tab-delimited file to analyse")]
    pub filename: Option<PathBuf>,

    #[arg(short = 'd', long, value_name = "PATH", help = "Directory whose matching files are analysed")]
    pub directory: Option<PathBuf>,

    #[arg(short = 'o', long, value_name = "PATH", default_value = DEFAULT_REPORT_PATH, help = "Report file to write")]
    pub output: PathBuf,

    #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION, help = "File extension selected in directory mode")]
    pub extension: String,

    #[arg(long, short, help = "Verbose mode: debug-level logging")]
    pub verbose: bool,
}

impl Cli {
    /// Turn parsed arguments into a run configuration.
    pub fn into_config(self) -> anyhow::Result<RunConfig> {
        let input = match (self.filename, self.directory) {
            (Some(file), None) => InputSource::SingleFile(file),
            (None, Some(dir)) => InputSource::Directory(dir),
            _ => anyhow::bail!("exactly one of --filename or --directory is required"),
        };

        Ok(RunConfig {
            input,
            primary_column: self.primary_context_column,
            match_spec: self.matching_context_column,
            output_path: self.output,
            extension: self.extension.trim_start_matches('.').to_string(),
        })
    }
}
