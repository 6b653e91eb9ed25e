//! Error types for purchase data ingestion.

use std::path::PathBuf;

use basket_common::CommonError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while reading a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Encoding Errors ===
    /// File uses an encoding that is not supported.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// The configured fallback encoding label is not recognized.
    #[error("unknown encoding label: {label}")]
    UnknownEncoding { label: String },

    // === CSV Parsing Errors ===
    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File has no header or no data rows.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Polars could not load the normalized records.
    #[error("failed to load {path} into a DataFrame: {source}")]
    DataFrame {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    /// The loaded DataFrame could not be converted into a table.
    #[error("invalid table in {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: CommonError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/sales.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /data/sales.csv");

        let err = IngestError::FileTooLarge {
            path: PathBuf::from("big.csv"),
            size: 10,
            max_size: 5,
        };
        assert_eq!(err.to_string(), "file big.csv is 10 bytes, limit is 5");
    }
}
