//! Options for reading source files.

use serde::{Deserialize, Serialize};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Encoding used when a file is not valid UTF-8.
pub const DEFAULT_FALLBACK_ENCODING: &str = "windows-1252";

/// How to read a delimited text file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Field delimiter. `None` sniffs it from the header line.
    pub delimiter: Option<u8>,
    /// WHATWG label of the encoding tried when UTF-8 decoding fails.
    pub fallback_encoding: String,
    /// Files larger than this are rejected before reading.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            fallback_encoding: DEFAULT_FALLBACK_ENCODING.to_string(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_fallback_encoding(mut self, label: impl Into<String>) -> Self {
        self.fallback_encoding = label.into();
        self
    }

    pub fn with_max_file_size(mut self, max_size: u64) -> Self {
        self.max_file_size = max_size;
        self
    }
}
