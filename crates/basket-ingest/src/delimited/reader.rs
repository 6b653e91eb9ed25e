//! Delimited text file reading into a [`RawTable`].
//!
//! Records are normalized with the `csv` crate first (blank rows dropped,
//! ragged rows padded or truncated, headers de-duplicated, cells trimmed),
//! then loaded by Polars, which infers one dtype per column.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use basket_common::table_from_dataframe;
use basket_model::RawTable;
use csv::{ReaderBuilder, WriterBuilder};
use polars::prelude::*;
use tracing::{debug, info, info_span};

use crate::decode::{decode_bytes, resolve_encoding, utf16_bom};
use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

use super::header::{dedupe_headers, sniff_delimiter};

/// Cell texts read as missing values.
pub const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn io_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

/// Check file size against a limit before loading.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Header and rectangular, trimmed rows of a delimited text.
struct Records {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    skipped: usize,
}

fn read_records(text: &str, delimiter: u8, path: &Path) -> Result<Records> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(path, source))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        if headers.is_none() {
            headers = Some(dedupe_headers(record.iter().map(str::to_string).collect()));
            continue;
        }
        let width = headers.as_ref().map_or(0, Vec::len);
        let row = (0..width)
            .map(|idx| record.get(idx).unwrap_or_default().trim().to_string())
            .collect();
        rows.push(row);
    }

    let headers = headers.ok_or_else(|| IngestError::EmptyFile {
        path: path.to_path_buf(),
    })?;
    if rows.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(Records {
        headers,
        rows,
        skipped,
    })
}

/// Writes the normalized records back out as delimited text.
fn normalized_text(records: &Records, delimiter: u8, path: &Path) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    writer
        .write_record(&records.headers)
        .map_err(|source| csv_error(path, source))?;
    for row in &records.rows {
        writer
            .write_record(row)
            .map_err(|source| csv_error(path, source))?;
    }
    writer
        .into_inner()
        .map_err(|e| io_error(path, e.into_error()))
}

/// Loads delimited text with Polars, scanning every row for the schema.
fn load_dataframe(buffer: Vec<u8>, delimiter: u8, path: &Path) -> Result<DataFrame> {
    let null_values: Vec<PlSmallStr> = NA_TOKENS.iter().map(|token| (*token).into()).collect();
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|parse| {
            parse
                .with_separator(delimiter)
                .with_missing_is_null(true)
                .with_null_values(Some(NullValues::AllColumns(null_values.clone())))
        })
        .into_reader_with_file_handle(Cursor::new(buffer))
        .finish()
        .map_err(|source| IngestError::DataFrame {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads a delimited text file into a [`RawTable`].
///
/// The first non-blank record is the header. Rows shorter than the header
/// are padded with blanks, longer rows are truncated, and fully blank rows
/// are skipped. A column whose present cells are all integers becomes
/// integer-typed, all numbers float-typed, anything else text; the
/// [`NA_TOKENS`] and blank cells are missing.
pub fn read_raw_table(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let fallback = resolve_encoding(&options.fallback_encoding)?;
    check_file_size(path, options.max_file_size)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    if let Some(encoding) = utf16_bom(&bytes) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding,
        });
    }
    let (text, encoding) = decode_bytes(&bytes, fallback);
    let delimiter = options.delimiter.unwrap_or_else(|| sniff_delimiter(&text));
    debug!(
        encoding = encoding.name(),
        delimiter = %char::from(delimiter).escape_default(),
        "decoded input"
    );

    let records = read_records(&text, delimiter, path)?;
    let skipped = records.skipped;
    let buffer = normalized_text(&records, delimiter, path)?;
    let df = load_dataframe(buffer, delimiter, path)?;
    debug!(schema = ?df.schema(), "loaded DataFrame");

    let table = table_from_dataframe(&df).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        rows = table.height(),
        columns = table.width(),
        skipped_blank_rows = skipped,
        encoding = encoding.name(),
        duration_ms = start.elapsed().as_millis(),
        "read input table"
    );
    Ok(table)
}
