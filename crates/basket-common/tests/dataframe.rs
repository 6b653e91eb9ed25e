//! DataFrame to RawTable conversion.

use basket_common::table_from_dataframe;
use basket_model::CellValue;
use polars::prelude::*;

#[test]
fn test_converts_columns_in_order() {
    let df = df!(
        "order_id" => [1i64, 1, 2],
        "item" => ["milk", "bread", "milk"],
        "price" => [1.5f64, 2.0, 1.5],
    )
    .unwrap();

    let table = table_from_dataframe(&df).unwrap();
    assert_eq!(table.column_names(), vec!["order_id", "item", "price"]);
    assert_eq!(table.height(), 3);

    let item = table.column("item").unwrap();
    assert!(item.is_text_like());
    assert_eq!(item.distinct_non_blank(), 2);

    let order = table.column("order_id").unwrap();
    assert_eq!(order.get(2), Some(&CellValue::Integer(2)));
    assert!(!order.is_text_like());
}

#[test]
fn test_nulls_become_empty_cells() {
    let df = df!(
        "item" => [Some("milk"), None, Some(" ")],
    )
    .unwrap();

    let table = table_from_dataframe(&df).unwrap();
    let item = table.column("item").unwrap();
    assert_eq!(item.get(1), Some(&CellValue::Empty));
    assert!(item.get(2).is_some_and(CellValue::is_blank));
    assert_eq!(item.distinct_non_blank(), 1);
}

#[test]
fn test_empty_frame_is_empty_table() {
    let df = DataFrame::empty();
    let table = table_from_dataframe(&df).unwrap();
    assert!(table.is_empty());
}
