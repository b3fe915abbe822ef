/// Input discovery — lists a directory's candidate files.
///
/// Only the directory's own entries are considered (no recursion). Entries
/// are regular files (symlinks followed) whose name ends in `.<extension>`,
/// returned in lexicographic file-name order. Hidden files are included.
use crate::error::DiscoveryError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension used when none is configured.
pub const DEFAULT_EXTENSION: &str = "csv";

/// List the files in `dir` that end in `.<extension>`, sorted by name.
pub fn discover_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !dir.is_dir() {
        return Err(DiscoveryError::NotADirectory(dir.to_path_buf()));
    }

    let suffix = format!(".{extension}");
    let walker = jwalk::WalkDir::new(dir)
        .max_depth(1)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    let mut files = Vec::new();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // The root itself failing to list is fatal; a single bad
                // entry is only skipped.
                if err.depth() == 0 {
                    return Err(DiscoveryError::Walk {
                        path: dir.to_path_buf(),
                        message: err.to_string(),
                    });
                }
                warn!("Skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };

        if entry.depth == 0 {
            continue;
        }

        let path = entry.path();
        if !entry.file_name.to_string_lossy().ends_with(&suffix) {
            debug!("Ignoring {} (extension)", path.display());
            continue;
        }
        if !path.is_file() {
            debug!("Ignoring {} (not a file)", path.display());
            continue;
        }
        files.push(path);
    }

    debug!("Found {} input file(s) in {}", files.len(), dir.display());
    Ok(files)
}
