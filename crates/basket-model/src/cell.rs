//! Untyped cell values from a source table.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single cell of a [`RawTable`](crate::RawTable).
///
/// Source files carry no schema, so every cell is one of a small set of
/// shapes. Downstream stringification and blank checks match on this enum
/// instead of guessing at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Empty,
}

impl CellValue {
    /// Builds a text cell, mapping whitespace-only input to [`CellValue::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// True for missing values: `Empty`, NaN floats and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Float(v) => v.is_nan(),
            Self::Text(s) => s.trim().is_empty(),
            Self::Integer(_) | Self::Date(_) | Self::DateTime(_) => false,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Trimmed string form of the cell. Blank cells render as `""`.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.trim().to_string(),
            Self::Integer(v) => v.to_string(),
            Self::Float(v) if v.is_nan() => String::new(),
            Self::Float(v) => format_numeric(*v),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Like [`to_text`](Self::to_text) but `None` for blank cells.
    pub fn to_text_non_blank(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        let text = self.to_text();
        if text.is_empty() { None } else { Some(text) }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Formats a floating-point number without a trailing `.0`.
///
/// Whole numbers render as integers so that an order id read as `1001.0`
/// groups with the same id read as `1001`.
///
/// # Examples
///
/// ```
/// use basket_model::format_numeric;
///
/// assert_eq!(format_numeric(1001.0), "1001");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
