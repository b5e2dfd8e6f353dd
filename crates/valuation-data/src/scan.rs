//! Resolving vendor files by extension.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use valuation_core::error::DataError;

/// Find the first file in `dir` whose extension matches `extension`.
///
/// Matching is case-insensitive and entries are considered in name order so
/// the result is stable across platforms. An unreadable or missing
/// directory is reported the same way as an empty one.
pub fn first_with_extension(dir: &Path, extension: &str) -> Result<PathBuf, DataError> {
    let no_match = || DataError::NoMatchingFile {
        dir: dir.to_path_buf(),
        extension: extension.to_string(),
    };

    let entries = fs::read_dir(dir).map_err(|_| no_match())?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(extension))
                .unwrap_or(false)
        })
        .collect();
    candidates.sort();

    let found = candidates.into_iter().next().ok_or_else(no_match)?;
    debug!("Resolved {:?} in {:?}", found, dir);
    Ok(found)
}
