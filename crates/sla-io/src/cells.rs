//! Cell-level conversions shared by the loaders and holiday sources.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use sla_core::errors::{Error, Result};
use sla_core::parsers::parse_whole_number;
use sla_time::Date;

/// Date layouts seen in spreadsheet exports, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a date cell.
///
/// Accepts ISO dates, ISO date-times (the time is dropped), and the
/// `DD.MM.YYYY` / `DD/MM/YYYY` layouts.
pub fn parse_date_cell(cell: &str) -> Result<Date> {
    let cell = cell.trim();
    let naive = DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(cell, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(cell, f).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| Error::Parse(format!("'{cell}' is not a recognised date")))?;
    from_naive(naive)
}

/// Convert a `chrono` date into a [`Date`].
pub fn from_naive(naive: NaiveDate) -> Result<Date> {
    let year = u16::try_from(naive.year())
        .map_err(|_| Error::Date(format!("year {} out of range", naive.year())))?;
    Date::from_ymd(year, naive.month() as u8, naive.day() as u8)
}

/// Parse a non-negative whole-number cell (`"4"` or `"4.0"`).
pub fn parse_days_cell(cell: &str) -> Result<u32> {
    parse_whole_number(cell)
        .ok_or_else(|| Error::Parse(format!("'{}' is not a whole number of days", cell.trim())))
}

/// Flatten a `csv` error into the workspace error type.
pub fn csv_error(e: csv::Error) -> Error {
    match e.kind() {
        csv::ErrorKind::Io(_) => Error::Io(e.to_string()),
        _ => Error::Parse(e.to_string()),
    }
}

/// Flatten a `serde_json` error into the workspace error type.
pub fn json_error(e: serde_json::Error) -> Error {
    if e.is_io() {
        Error::Io(e.to_string())
    } else {
        Error::Parse(e.to_string())
    }
}
