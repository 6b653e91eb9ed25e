//! Calendar-date normalization for transaction keys.
//!
//! Baskets keyed by date group on the calendar day, so time-of-day is
//! discarded. Text that does not parse as a date is kept as-is.

use basket_model::CellValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Parses the calendar date of a date or date-time string.
///
/// # Examples
///
/// ```
/// use basket_core::datetime::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(parse_calendar_date("2024-03-09 18:45:00"), Some(day));
/// assert_eq!(parse_calendar_date("03/09/2024"), Some(day));
/// assert_eq!(parse_calendar_date("soon"), None);
/// ```
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        })
}

/// Renders a cell at calendar-day granularity.
///
/// Dates and date-times become `YYYY-MM-DD`; unparseable text is returned
/// trimmed; blank cells become `""`.
pub fn normalize_calendar_date(value: &CellValue) -> String {
    match value {
        CellValue::Date(date) => date.format("%Y-%m-%d").to_string(),
        CellValue::DateTime(dt) => dt.date().format("%Y-%m-%d").to_string(),
        CellValue::Text(text) => parse_calendar_date(text).map_or_else(
            || text.trim().to_string(),
            |date| date.format("%Y-%m-%d").to_string(),
        ),
        CellValue::Integer(_) | CellValue::Float(_) | CellValue::Empty => value.to_text(),
    }
}
