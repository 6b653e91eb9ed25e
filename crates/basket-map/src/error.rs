//! Error types for synonym list loading.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynonymError {
    #[error("failed to read synonym file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse synonym file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, SynonymError>;
