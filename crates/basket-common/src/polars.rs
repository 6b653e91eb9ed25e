//! Polars AnyValue conversion functions.

use basket_model::{CellValue, ModelError, RawColumn, RawTable};
use chrono::NaiveDate;
use polars::prelude::*;
use thiserror::Error;

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

#[derive(Debug, Error)]
pub enum CommonError {
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Converts a Polars `AnyValue` to a [`CellValue`].
///
/// # Examples
///
/// ```
/// use basket_common::any_to_cell;
/// use basket_model::CellValue;
/// use polars::prelude::AnyValue;
///
/// assert_eq!(any_to_cell(AnyValue::Null), CellValue::Empty);
/// assert_eq!(any_to_cell(AnyValue::Int32(42)), CellValue::Integer(42));
/// assert_eq!(any_to_cell(AnyValue::String(" milk ")), CellValue::Text(" milk ".into()));
/// ```
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Empty,
        AnyValue::Int8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int64(v) => CellValue::Integer(v),
        AnyValue::UInt8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => CellValue::Integer(v),
            Err(_) => CellValue::Float(v as f64),
        },
        AnyValue::Float32(v) => CellValue::Float(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Float(v),
        AnyValue::String(s) => CellValue::text(s),
        AnyValue::StringOwned(s) => CellValue::text(s.as_str()),
        AnyValue::Boolean(b) => CellValue::Text(b.to_string()),
        AnyValue::Date(days) => days
            .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map_or_else(|| CellValue::Text(days.to_string()), CellValue::Date),
        other => CellValue::text(other.to_string()),
    }
}

/// Converts an `AnyValue` to its trimmed text form; `Null` becomes `""`.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    any_to_cell(value).to_text()
}

/// Builds a [`RawTable`] from a `DataFrame`, converting every cell.
pub fn table_from_dataframe(df: &DataFrame) -> Result<RawTable, CommonError> {
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let mut values = Vec::with_capacity(column.len());
        for idx in 0..column.len() {
            values.push(any_to_cell(column.get(idx)?));
        }
        columns.push(RawColumn::new(column.name().as_str(), values));
    }
    Ok(RawTable::new(columns)?)
}
