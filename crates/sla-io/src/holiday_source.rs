//! Where public-holiday feeds come from.
//!
//! Every feed is a [`HolidaySource`]:
//!
//! * [`NagerApiSource`]: the Nager.Date `PublicHolidays` REST endpoint;
//! * [`JsonFileSource`]: that endpoint's JSON array saved to disk;
//! * [`CsvFileSource`]: a flat export with `date`, `countryCode` and
//!   optional `localName`, `name` and `types` columns.
//!
//! [`FallbackSource`] chains two sources so a local export can stand in for
//! an unreachable API.
//!
//! [`NagerApiSource`]: crate::nager::NagerApiSource
//! [`JsonFileSource`]: crate::nager::JsonFileSource

use crate::cells::{csv_error, parse_date_cell};
use crate::nager::JsonFileSource;
use crate::schema::{ColumnIndex, ColumnSchema};
use sla_core::errors::{Error, Result};
use sla_time::{CountryCode, HolidayRecord};
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub(crate) const PUBLIC: &str = "Public";

/// A provider of holiday records.
pub trait HolidaySource: Debug {
    /// Human-readable description used in logs and errors.
    fn name(&self) -> &str;

    /// Load every record the source holds.
    ///
    /// Rows with an unreadable date or country code are dropped with a
    /// warning; only unreadable input as a whole is an error.
    fn fetch(&self) -> Result<Vec<HolidayRecord>>;
}

// ── CSV export ────────────────────────────────────────────────────────────────

/// Parse a CSV holiday export.
///
/// A row is public if its `types` cell mentions `Public`; a file without a
/// `types` column is all public.  The cell may be a plain comma-separated
/// list (`Public,Bank`) or a bracketed one (`['Public', 'Bank']`).
///
/// # Errors
/// [`Error::Parse`] if a required header is missing or the CSV is malformed.
pub fn parse_holiday_csv<R: Read>(reader: R, schema: &ColumnSchema) -> Result<Vec<HolidayRecord>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let index = schema.resolve(rdr.headers().map_err(csv_error)?.iter())?;
    let has_types = index.position(ColumnSchema::HOLIDAY_TYPES).is_some();

    let mut out = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row.map_err(csv_error)?;
        let line = i as u64 + 2;
        match holiday_from_row(&index, &row, has_types, line) {
            Ok(r) => out.push(r),
            Err(e) => warn!(line, "dropping holiday: {e}"),
        }
    }
    Ok(out)
}

fn holiday_from_row(
    index: &ColumnIndex,
    row: &csv::StringRecord,
    has_types: bool,
    line: u64,
) -> Result<HolidayRecord> {
    let date = parse_date_cell(index.require(row, ColumnSchema::HOLIDAY_DATE, line)?)?;
    let code = CountryCode::new(index.require(row, ColumnSchema::COUNTRY_CODE, line)?)?;
    let types = index.get(row, ColumnSchema::HOLIDAY_TYPES);
    let is_public = !has_types || types.is_some_and(|t| t.contains(PUBLIC));
    Ok(HolidayRecord::new(code, date, is_public)
        .with_names(
            index.get(row, ColumnSchema::LOCAL_NAME).map(str::to_string),
            index.get(row, ColumnSchema::HOLIDAY_NAME).map(str::to_string),
        )
        .with_types(types.map(split_types).unwrap_or_default()))
}

/// A CSV holiday export on disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    name: String,
    schema: ColumnSchema,
}

impl CsvFileSource {
    /// Source reading `path` with [`ColumnSchema::holidays`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("csv:{}", path.display());
        Self {
            path,
            name,
            schema: ColumnSchema::holidays(),
        }
    }

    /// Replace the column schema.
    pub fn with_schema(mut self, schema: ColumnSchema) -> Self {
        self.schema = schema;
        self
    }
}

impl HolidaySource for CsvFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<Vec<HolidayRecord>> {
        let file = open(&self.path)?;
        let records = parse_holiday_csv(BufReader::new(file), &self.schema)?;
        info!(source = %self.name, records = records.len(), "loaded holidays");
        Ok(records)
    }
}

// ── Fallback chain ────────────────────────────────────────────────────────────

/// Try `primary`, then `fallback` if the primary fails or comes back empty.
#[derive(Debug)]
pub struct FallbackSource {
    primary: Box<dyn HolidaySource>,
    fallback: Box<dyn HolidaySource>,
    name: String,
}

impl FallbackSource {
    /// Chain two sources.
    pub fn new(primary: Box<dyn HolidaySource>, fallback: Box<dyn HolidaySource>) -> Self {
        let name = format!("{} (fallback {})", primary.name(), fallback.name());
        Self {
            primary,
            fallback,
            name,
        }
    }
}

impl HolidaySource for FallbackSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<Vec<HolidayRecord>> {
        let primary_err = match self.primary.fetch() {
            Ok(records) if !records.is_empty() => return Ok(records),
            Ok(_) => format!("{} returned no holidays", self.primary.name()),
            Err(e) => format!("{}: {e}", self.primary.name()),
        };
        warn!(
            fallback = %self.fallback.name(),
            "primary holiday source unusable ({primary_err}); using fallback"
        );
        self.fallback.fetch().map_err(|e| {
            Error::HolidaySource(format!(
                "{primary_err}; {}: {e}",
                self.fallback.name()
            ))
        })
    }
}

/// Pick a file source by extension: `.json` or `.csv`.
///
/// # Errors
/// [`Error::InvalidArgument`] for any other extension.
pub fn source_for_path(path: &Path) -> Result<Box<dyn HolidaySource>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(Box::new(JsonFileSource::new(path))),
        Some("csv") => Ok(Box::new(CsvFileSource::new(path))),
        _ => Err(Error::InvalidArgument(format!(
            "cannot infer holiday format of '{}' (expected .json or .csv)",
            path.display()
        ))),
    }
}

/// Split a `types` cell into its entries.
pub(crate) fn split_types(cell: &str) -> Vec<String> {
    cell.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|t| t.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sla_time::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn csv_types_column() {
        let csv = "date,countryCode,types\n\
                   2020-01-01,SK,['Public']\n\
                   2020-03-01,SK,['Observance']\n\
                   2020-09-01 00:00:00,SK,\"['Public', 'Bank']\"\n";
        let records = parse_holiday_csv(csv.as_bytes(), &ColumnSchema::holidays()).unwrap();
        let public: Vec<_> = records.iter().filter(|r| r.is_public).map(|r| r.date).collect();
        assert_eq!(public, vec![date(2020, 1, 1), date(2020, 9, 1)]);
        assert_eq!(records[2].types, vec!["Public".to_string(), "Bank".to_string()]);
        assert_eq!(records[1].types, vec!["Observance".to_string()]);
    }

    #[test]
    fn csv_carries_names() {
        let csv = "date,localName,name,countryCode,types
                   2020-01-01,Nový rok,New Year's Day,CZ,Public
";
        let records = parse_holiday_csv(csv.as_bytes(), &ColumnSchema::holidays()).unwrap();
        assert_eq!(records[0].local_name.as_deref(), Some("Nový rok"));
        assert_eq!(records[0].name.as_deref(), Some("New Year's Day"));
        assert_eq!(records[0].types, vec!["Public".to_string()]);
        assert!(records[0].is_public);
    }

    #[test]
    fn types_cell_layouts() {
        assert_eq!(split_types("['Public', 'Bank']"), vec!["Public", "Bank"]);
        assert_eq!(split_types("Public,Bank"), vec!["Public", "Bank"]);
        assert_eq!(split_types("[\"Public\"]"), vec!["Public"]);
        assert!(split_types("[]").is_empty());
    }

    #[test]
    fn csv_without_types_is_public() {
        let csv = "Date,CountryCode\n2021-10-28,CZ\n";
        let records = parse_holiday_csv(csv.as_bytes(), &ColumnSchema::holidays()).unwrap();
        assert_eq!(
            records,
            vec![HolidayRecord::public(CountryCode::new("CZ").unwrap(), date(2021, 10, 28))]
        );
    }

    #[test]
    fn extension_dispatch() {
        assert!(source_for_path(Path::new("h.json")).unwrap().name().starts_with("json:"));
        assert!(source_for_path(Path::new("h.CSV")).unwrap().name().starts_with("csv:"));
        assert!(matches!(
            source_for_path(Path::new("h.xlsx")),
            Err(Error::InvalidArgument(_))
        ));
    }
}
