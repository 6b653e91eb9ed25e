//! Loading analysis options from TOML.
//!
//! ```toml
//! min_support = 0.01
//! min_lift = 1.2
//! fallback_group_size = 4
//!
//! [synonyms]
//! item = ["artikel", "produkt"]
//! ```

use std::path::{Path, PathBuf};

use basket_model::AnalysisError;
use thiserror::Error;

use crate::options::AnalysisOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: AnalysisError,
    },
}

/// Parses options from a TOML document without validating them.
pub fn options_from_toml_str(contents: &str) -> Result<AnalysisOptions, toml::de::Error> {
    toml::from_str(contents)
}

/// Loads and validates options from a TOML file.
pub fn load_options(path: &Path) -> Result<AnalysisOptions, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = options_from_toml_str(&contents).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    options.validate().map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(options)
}
