//! Purchase data ingestion.
//!
//! Reads delimited text exports of unknown origin into a
//! [`RawTable`](basket_model::RawTable):
//!
//! - **Decoding**: UTF-8 (with or without BOM), else a fallback encoding
//! - **Delimiters**: `,`, tab, `;` or `|`, sniffed from the header line
//! - **Headers**: trimmed, with duplicates renamed `name.1`, `name.2`, ...
//! - **Cells**: typed per column by Polars schema inference
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use basket_ingest::{IngestOptions, read_raw_table};
//!
//! let table = read_raw_table(Path::new("sales.csv"), &IngestOptions::default())?;
//! ```

#![deny(unsafe_code)]

mod decode;
mod delimited;
mod error;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === Options ===
pub use options::{DEFAULT_FALLBACK_ENCODING, IngestOptions, MAX_FILE_SIZE};

// === Reading ===
pub use delimited::{
    DELIMITER_CANDIDATES, NA_TOKENS, check_file_size, dedupe_headers, normalize_header,
    read_raw_table, sniff_delimiter,
};
pub use decode::{decode_bytes, resolve_encoding, utf16_bom};
