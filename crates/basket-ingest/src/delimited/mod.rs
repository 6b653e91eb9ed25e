//! Delimited text reading utilities.

mod header;
mod reader;

pub use header::{DELIMITER_CANDIDATES, dedupe_headers, normalize_header, sniff_delimiter};
pub use reader::{NA_TOKENS, check_file_size, read_raw_table};
