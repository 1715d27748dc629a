//! CSV report writers.
//!
//! Each writer emits its header row even when there are no rows, so an
//! empty batch still produces a well-formed file.

use crate::cells::csv_error;
use crate::holiday_source::PUBLIC;
use sla_compliance::{ClassifiedRecord, CountryAggregate};
use sla_core::errors::{Error, Result};
use sla_core::{BusinessDays, LeadTimeDays, Percentage, Size, Status};
use sla_time::{Date, HolidayCount, HolidayRecord};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// File name of the public-holiday listing.
pub const HOLIDAYS_FILE: &str = "holidays.csv";
/// File name of the per-year holiday counts.
pub const HOLIDAY_COUNTS_FILE: &str = "holiday_counts.csv";
/// File name of the classified repair records.
pub const CLASSIFIED_FILE: &str = "classified_repairs.csv";
/// File name of the per-country aggregates.
pub const AGGREGATES_FILE: &str = "country_aggregates.csv";

#[derive(serde::Serialize)]
struct HolidayRow<'a> {
    date: Date,
    local_name: Option<&'a str>,
    name: Option<&'a str>,
    country_code: &'a str,
    types: String,
}

#[derive(serde::Serialize)]
struct HolidayCountRow<'a> {
    year: u16,
    country: &'a str,
    holiday_count: Size,
}

#[derive(serde::Serialize)]
struct ClassifiedRow<'a> {
    id: &'a str,
    country: &'a str,
    start_date: Date,
    end_date: Date,
    business_days: BusinessDays,
    lead_time: LeadTimeDays,
    status: Status,
}

#[derive(serde::Serialize)]
struct AggregateRow<'a> {
    country: &'a str,
    hit_count: Size,
    miss_count: Size,
    hit_rate_pct: Percentage,
}

fn write_rows<W, T, I>(w: W, header: &[&str], rows: I) -> Result<()>
where
    W: Write,
    T: serde::Serialize,
    I: IntoIterator<Item = T>,
{
    let mut wrt = csv::WriterBuilder::new().has_headers(false).from_writer(w);
    wrt.write_record(header).map_err(csv_error)?;
    for row in rows {
        wrt.serialize(row).map_err(csv_error)?;
    }
    wrt.flush().map_err(Error::from)
}

/// Public holidays, one row per record:
/// `date,localName,name,countryCode,types`.
///
/// Non-public records are left out.  `types` is written comma-separated; a
/// record that carries no categories is written as `Public`.
pub fn write_holidays<W: Write>(w: W, records: &[HolidayRecord]) -> Result<()> {
    write_rows(
        w,
        &["date", "localName", "name", "countryCode", "types"],
        records.iter().filter(|r| r.is_public).map(|r| HolidayRow {
            date: r.date,
            local_name: r.local_name.as_deref(),
            name: r.name.as_deref(),
            country_code: r.country_code.as_str(),
            types: if r.types.is_empty() {
                PUBLIC.to_string()
            } else {
                r.types.join(",")
            },
        }),
    )
}

/// Holiday counts per country and year: `Year,Country,HolidayCount`.
pub fn write_holiday_counts<W: Write>(w: W, counts: &[HolidayCount]) -> Result<()> {
    write_rows(
        w,
        &["Year", "Country", "HolidayCount"],
        counts.iter().map(|c| HolidayCountRow {
            year: c.year,
            country: c.country_code.as_str(),
            holiday_count: c.holiday_count,
        }),
    )
}

/// Classified records:
/// `ID,Country,Start Date,End Date,BusinessDays,LeadTime,Status`.
pub fn write_classified<W: Write>(w: W, records: &[ClassifiedRecord]) -> Result<()> {
    write_rows(
        w,
        &[
            "ID",
            "Country",
            "Start Date",
            "End Date",
            "BusinessDays",
            "LeadTime",
            "Status",
        ],
        records.iter().map(|c| ClassifiedRow {
            id: &c.record.id,
            country: &c.record.country_name,
            start_date: c.record.start_date,
            end_date: c.record.end_date,
            business_days: c.business_days,
            lead_time: c.lead_time_days,
            status: c.status,
        }),
    )
}

/// Per-country aggregates: `Country,Hit count,Miss count,Hit rate (%)`.
pub fn write_aggregates<W: Write>(w: W, aggregates: &[CountryAggregate]) -> Result<()> {
    write_rows(
        w,
        &["Country", "Hit count", "Miss count", "Hit rate (%)"],
        aggregates.iter().map(|a| AggregateRow {
            country: &a.country_name,
            hit_count: a.hit_count,
            miss_count: a.miss_count,
            hit_rate_pct: a.hit_rate_pct,
        }),
    )
}

/// Create `path` and hand a buffered writer to `write`.
pub fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> Result<()>,
{
    let file = File::create(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
    write(BufWriter::new(file))?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}
