/// Run configuration, built once by the frontend and passed down.
use crate::discovery::{discover_files, DEFAULT_EXTENSION};
use crate::error::DiscoveryError;
use crate::report::DEFAULT_REPORT_PATH;
use std::path::PathBuf;

/// Where input files come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single file, analysed regardless of its extension.
    SingleFile(PathBuf),
    /// Every matching file directly inside a directory.
    Directory(PathBuf),
}

/// Everything a batch run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: InputSource,
    /// 1-based column whose values are profiled.
    pub primary_column: usize,
    /// Raw `COLUMN=VALUE` filter, validated per file.
    pub match_spec: Option<String>,
    pub output_path: PathBuf,
    /// Extension (without the dot) selecting files in directory mode.
    pub extension: String,
}

impl RunConfig {
    /// A config with the default column, output path and extension.
    pub fn new(input: InputSource) -> Self {
        Self {
            input,
            primary_column: 1,
            match_spec: None,
            output_path: PathBuf::from(DEFAULT_REPORT_PATH),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// The files to analyse, in processing order.
    pub fn input_files(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        match &self.input {
            InputSource::SingleFile(path) => Ok(vec![path.clone()]),
            InputSource::Directory(dir) => discover_files(dir, &self.extension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = RunConfig::new(InputSource::SingleFile("a.tsv".into()));
        assert_eq!(config.primary_column, 1);
        assert_eq!(config.match_spec, None);
        assert_eq!(config.output_path, PathBuf::from("output/complete_analysis.csv"));
        assert_eq!(config.extension, "csv");
    }

    /// A single file is taken as-is, even without the directory-mode extension.
    #[test]
    fn single_file_input_is_not_filtered() {
        let config = RunConfig::new(InputSource::SingleFile("data.tsv".into()));
        assert_eq!(config.input_files().unwrap(), vec![PathBuf::from("data.tsv")]);
    }

    #[test]
    fn directory_input_uses_extension() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        fs::write(tmp.path().join("b.csv"), "h\n").unwrap();
        fs::write(tmp.path().join("a.csv"), "h\n").unwrap();
        fs::write(tmp.path().join("c.tsv"), "h\n").unwrap();

        let config = RunConfig::new(InputSource::Directory(tmp.path().to_path_buf()));
        let files = config.input_files().unwrap();
        assert_eq!(
            files,
            vec![tmp.path().join("a.csv"), tmp.path().join("b.csv")]
        );
    }
}
