//! Error types for valuation data management.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::CacheKey;

/// Top-level valuation error.
#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Node definitions error: {0}")]
    Nodes(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Cache-miss signal raised by a store lookup.
///
/// Adapters turn this into a load; it is not part of [`DataError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Key not found in data store: {0}")]
pub struct KeyNotFound(pub CacheKey);

/// Errors raised by raw vendor loaders.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Parse error in {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("Source not found: {0}")]
    MissingSource(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Loader error: {0}")]
    Other(String),
}

impl LoaderError {
    /// Convenience constructor for parse failures.
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by the vendor adapters to their callers.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No file with extension .{extension} found in {}", dir.display())]
    NoMatchingFile { dir: PathBuf, extension: String },

    #[error(transparent)]
    Loader(#[from] LoaderError),
}

/// Persistent store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported store version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Result type alias for valuation operations.
pub type ValuationResult<T> = Result<T, ValuationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_error_passes_through_unchanged() {
        let err: DataError = LoaderError::parse("DA_LMP.csv", "bad header").into();
        assert_eq!(err.to_string(), "Parse error in DA_LMP.csv: bad header");
        assert!(matches!(err, DataError::Loader(LoaderError::Parse { .. })));
    }

    #[test]
    fn test_no_matching_file_message() {
        let err = DataError::NoMatchingFile {
            dir: PathBuf::from("data/ERCOT/SPP/2010"),
            extension: "xlsx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No file with extension .xlsx found in data/ERCOT/SPP/2010"
        );
    }
}
