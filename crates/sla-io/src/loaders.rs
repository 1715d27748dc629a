//! Repair and lead-time table loaders.
//!
//! Both loaders are driven by a [`ColumnSchema`], so the header spellings
//! of a given export only need to be declared once.  Unlike the holiday
//! feed, these tables are hand-maintained: a bad cell fails the whole load
//! with the offending line number.

use crate::cells::{csv_error, parse_date_cell, parse_days_cell};
use crate::schema::ColumnSchema;
use sla_compliance::{LeadTimeEntry, LeadTimeTable, RepairRecord};
use sla_core::errors::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Read repair records from CSV.
///
/// Rows whose every cell is blank are ignored.
///
/// # Errors
/// [`Error::Parse`] on a missing header, an empty required cell, or an
/// unreadable date, with the line number.
pub fn read_repairs<R: Read>(reader: R, schema: &ColumnSchema) -> Result<Vec<RepairRecord>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let index = schema.resolve(rdr.headers().map_err(csv_error)?.iter())?;

    let mut out = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row.map_err(csv_error)?;
        if is_blank(&row) {
            continue;
        }
        let line = i as u64 + 2;
        let id = index.require(&row, ColumnSchema::REPAIR_ID, line)?;
        let country = index.require(&row, ColumnSchema::COUNTRY, line)?;
        let start = index.require(&row, ColumnSchema::START_DATE, line)?;
        let end = index.require(&row, ColumnSchema::END_DATE, line)?;
        out.push(RepairRecord::new(
            id,
            country,
            parse_date_cell(start).map_err(|e| at_line(line, e))?,
            parse_date_cell(end).map_err(|e| at_line(line, e))?,
        ));
    }
    Ok(out)
}

/// Read the lead-time table from CSV.
///
/// # Errors
/// [`Error::Parse`] on a missing header or a non-numeric lead time;
/// [`Error::Precondition`] if a country is listed twice with different
/// values.
pub fn read_lead_times<R: Read>(reader: R, schema: &ColumnSchema) -> Result<LeadTimeTable> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let index = schema.resolve(rdr.headers().map_err(csv_error)?.iter())?;

    let mut entries = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row.map_err(csv_error)?;
        if is_blank(&row) {
            continue;
        }
        let line = i as u64 + 2;
        let country = index.require(&row, ColumnSchema::COUNTRY, line)?;
        let days = index.require(&row, ColumnSchema::LEAD_TIME, line)?;
        let days = parse_days_cell(days).map_err(|e| at_line(line, e))?;
        entries.push(LeadTimeEntry::new(country, days));
    }
    LeadTimeTable::new(entries)
}

/// [`read_repairs`] over a file, with [`ColumnSchema::repairs`].
pub fn load_repairs(path: &Path) -> Result<Vec<RepairRecord>> {
    let records = read_repairs(open(path)?, &ColumnSchema::repairs())?;
    info!(path = %path.display(), records = records.len(), "loaded repair records");
    Ok(records)
}

/// [`read_lead_times`] over a file, with [`ColumnSchema::lead_times`].
pub fn load_lead_times(path: &Path) -> Result<LeadTimeTable> {
    let table = read_lead_times(open(path)?, &ColumnSchema::lead_times())?;
    info!(path = %path.display(), countries = table.len(), "loaded lead times");
    Ok(table)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::Io(format!("{}: {e}", path.display())))
}

fn is_blank(row: &csv::StringRecord) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

fn at_line(line: u64, e: Error) -> Error {
    match e {
        Error::Parse(msg) => Error::Parse(format!("line {line}: {msg}")),
        Error::Date(msg) => Error::Parse(format!("line {line}: {msg}")),
        other => other,
    }
}
