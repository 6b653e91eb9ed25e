//! Reading delimited files from disk.

use std::fs;
use std::path::PathBuf;

use basket_ingest::{IngestError, IngestOptions, read_raw_table};
use basket_model::CellValue;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_reads_comma_separated_long_format() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "sales.csv",
        b"Member_number,Date,itemDescription\n1808,21-07-2015,tropical fruit\n2552,05-01-2015,whole milk\n",
    );

    let table = read_raw_table(&path, &IngestOptions::default()).unwrap();
    assert_eq!(
        table.column_names(),
        vec!["Member_number", "Date", "itemDescription"]
    );
    assert_eq!(table.height(), 2);
    let members = table.column("Member_number").unwrap();
    assert_eq!(members.get(0), Some(&CellValue::Integer(1808)));
    let items = table.column("itemDescription").unwrap();
    assert_eq!(items.get(1), Some(&CellValue::Text("whole milk".to_string())));
}

#[test]
fn test_sniffs_semicolons_and_strips_bom() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "orders.csv",
        "\u{feff}order_id;items\n1;\"milk, bread\"\n2;eggs\n".as_bytes(),
    );

    let table = read_raw_table(&path, &IngestOptions::default()).unwrap();
    assert_eq!(table.column_names(), vec!["order_id", "items"]);
    let items = table.column("items").unwrap();
    assert_eq!(items.get(0), Some(&CellValue::Text("milk, bread".to_string())));
}

#[test]
fn test_explicit_delimiter_overrides_sniffing() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "pipe.txt", b"a|b,c\n1|2,3\n");

    let options = IngestOptions::new().with_delimiter(b'|');
    let table = read_raw_table(&path, &options).unwrap();
    assert_eq!(table.column_names(), vec!["a", "b,c"]);
}

#[test]
fn test_decodes_windows_1252_fallback() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "legacy.csv", b"order,item\n1,caf\xE9\n");

    let table = read_raw_table(&path, &IngestOptions::default()).unwrap();
    let items = table.column("item").unwrap();
    assert_eq!(items.get(0), Some(&CellValue::Text("café".to_string())));
}

#[test]
fn test_rejects_utf16() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "utf16.csv", b"\xFF\xFEi\0t\0e\0m\0");

    let result = read_raw_table(&path, &IngestOptions::default());
    assert!(matches!(
        result,
        Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
            ..
        })
    ));
}

#[test]
fn test_pads_ragged_rows_and_skips_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "ragged.csv", b"order,item,qty\n1,milk\n\n,,\n2,bread,3,extra\n");

    let table = read_raw_table(&path, &IngestOptions::default()).unwrap();
    assert_eq!(table.height(), 2);
    let qty = table.column("qty").unwrap();
    assert_eq!(qty.get(0), Some(&CellValue::Empty));
    assert_eq!(qty.get(1), Some(&CellValue::Integer(3)));
}

#[test]
fn test_duplicate_and_empty_headers_are_renamed() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "dupes.csv", b"item,item,,qty\na,b,c,1\n");

    let table = read_raw_table(&path, &IngestOptions::default()).unwrap();
    assert_eq!(
        table.column_names(),
        vec!["item", "item.1", "Unnamed: 2", "qty"]
    );
}

#[test]
fn test_header_only_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let header_only = write(&dir, "header.csv", b"order,item\n");
    let blank = write(&dir, "blank.csv", b"\n\n");

    for path in [header_only, blank] {
        let result = read_raw_table(&path, &IngestOptions::default());
        assert!(matches!(result, Err(IngestError::EmptyFile { .. })));
    }
}

#[test]
fn test_size_limit_and_missing_files() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "big.csv", b"order,item\n1,milk\n");

    let options = IngestOptions::new().with_max_file_size(4);
    assert!(matches!(
        read_raw_table(&path, &options),
        Err(IngestError::FileTooLarge { max_size: 4, .. })
    ));

    let missing = dir.path().join("missing.csv");
    assert!(matches!(
        read_raw_table(&missing, &IngestOptions::default()),
        Err(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn test_unknown_fallback_label_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "x.csv", b"item\nmilk\n");

    let options = IngestOptions::new().with_fallback_encoding("no-such-encoding");
    assert!(matches!(
        read_raw_table(&path, &options),
        Err(IngestError::UnknownEncoding { .. })
    ));
}

#[test]
fn test_polars_types_each_column() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "typed.csv",
        b"order,price,sku,note\n 1001 ,1,A-1,NA\n1002,2.5,17,milk\n1003,,18,null\n",
    );

    let table = read_raw_table(&path, &IngestOptions::default()).unwrap();
    let order = table.column("order").unwrap();
    assert_eq!(
        order.values(),
        &[
            CellValue::Integer(1001),
            CellValue::Integer(1002),
            CellValue::Integer(1003),
        ]
    );
    let price = table.column("price").unwrap();
    assert_eq!(
        price.values(),
        &[CellValue::Float(1.0), CellValue::Float(2.5), CellValue::Empty]
    );
    // One text cell keeps the whole column as text.
    let sku = table.column("sku").unwrap();
    assert_eq!(sku.get(1), Some(&CellValue::Text("17".to_string())));
    assert!(sku.is_text_like());
    let note = table.column("note").unwrap();
    assert_eq!(note.get(0), Some(&CellValue::Empty));
    assert_eq!(note.get(1), Some(&CellValue::Text("milk".to_string())));
    assert_eq!(note.get(2), Some(&CellValue::Empty));
}
