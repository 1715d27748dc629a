//! Declarative column-alias schemas for tabular input.
//!
//! Source spreadsheets name the same column differently (`"LeadTime"`,
//! `"LeadTime ( businessDays)"`, `"Lead Time"`).  A [`ColumnSchema`] lists,
//! for each canonical field, the header spellings it accepts.  Matching is
//! case-insensitive and ignores surrounding whitespace.

use sla_core::errors::{Error, Result};
use std::collections::HashMap;

/// One canonical field and the headers that may carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Canonical field name used by the loader.
    pub name: &'static str,
    /// Accepted header spellings.
    pub aliases: Vec<String>,
    /// Whether a table without this column is rejected.
    pub required: bool,
}

/// A set of [`FieldSpec`]s describing one kind of table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    fields: Vec<FieldSpec>,
}

impl ColumnSchema {
    /// Repair identifier.
    pub const REPAIR_ID: &'static str = "id";
    /// Country column of repair and lead-time tables.
    pub const COUNTRY: &'static str = "country";
    /// Repair start date.
    pub const START_DATE: &'static str = "start_date";
    /// Repair end date.
    pub const END_DATE: &'static str = "end_date";
    /// Lead time in business days.
    pub const LEAD_TIME: &'static str = "lead_time";
    /// Holiday date.
    pub const HOLIDAY_DATE: &'static str = "date";
    /// Holiday country code.
    pub const COUNTRY_CODE: &'static str = "country_code";
    /// Holiday type list.
    pub const HOLIDAY_TYPES: &'static str = "types";
    /// Holiday name in the local language.
    pub const LOCAL_NAME: &'static str = "local_name";
    /// Holiday name in English.
    pub const HOLIDAY_NAME: &'static str = "name";

    /// An empty schema.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a required field.
    pub fn required(mut self, name: &'static str, aliases: &[&str]) -> Self {
        self.fields.push(FieldSpec {
            name,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            required: true,
        });
        self
    }

    /// Add an optional field.
    pub fn optional(mut self, name: &'static str, aliases: &[&str]) -> Self {
        self.fields.push(FieldSpec {
            name,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            required: false,
        });
        self
    }

    /// Add an extra accepted spelling to an existing field.
    ///
    /// Unknown field names are ignored.
    pub fn with_alias(mut self, name: &str, alias: &str) -> Self {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.aliases.push(alias.to_string());
        }
        self
    }

    /// Default schema for the repair (`RawData`) table.
    pub fn repairs() -> Self {
        Self::new()
            .required(Self::REPAIR_ID, &["ID", "Id", "Repair ID", "repair_id"])
            .required(Self::COUNTRY, &["Country", "Country Name", "country_name"])
            .required(Self::START_DATE, &["Start Date", "StartDate", "start_date"])
            .required(Self::END_DATE, &["End Date", "EndDate", "end_date"])
    }

    /// Default schema for the `LeadTimes` table.
    pub fn lead_times() -> Self {
        Self::new()
            .required(Self::COUNTRY, &["Country", "Country Name", "country_name"])
            .required(
                Self::LEAD_TIME,
                &[
                    "LeadTime",
                    "LeadTime ( businessDays)",
                    "LeadTime (businessDays)",
                    "Lead Time",
                    "lead_time_days",
                ],
            )
    }

    /// Default schema for a CSV holiday export.
    pub fn holidays() -> Self {
        Self::new()
            .required(Self::HOLIDAY_DATE, &["date", "Date"])
            .required(Self::COUNTRY_CODE, &["countryCode", "CountryCode", "country_code"])
            .optional(Self::LOCAL_NAME, &["localName", "local_name"])
            .optional(Self::HOLIDAY_NAME, &["name"])
            .optional(Self::HOLIDAY_TYPES, &["types", "type"])
    }

    /// Locate every field of the schema in `headers`.
    ///
    /// # Errors
    /// [`Error::Parse`] naming the first required field with no matching
    /// header.
    pub fn resolve<'h>(&self, headers: impl IntoIterator<Item = &'h str>) -> Result<ColumnIndex> {
        let normalized: Vec<String> = headers.into_iter().map(normalize).collect();
        let mut positions = HashMap::new();
        for field in &self.fields {
            let found = field
                .aliases
                .iter()
                .map(|a| normalize(a))
                .find_map(|alias| normalized.iter().position(|h| *h == alias));
            match found {
                Some(i) => {
                    positions.insert(field.name, i);
                }
                None if field.required => {
                    return Err(Error::Parse(format!(
                        "no column for '{}' (accepted headers: {})",
                        field.name,
                        field.aliases.join(", ")
                    )));
                }
                None => {}
            }
        }
        Ok(ColumnIndex { positions })
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// Header positions of a resolved schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: HashMap<&'static str, usize>,
}

impl ColumnIndex {
    /// Position of `field`, if the table has it.
    pub fn position(&self, field: &str) -> Option<usize> {
        self.positions.get(field).copied()
    }

    /// The trimmed cell of `field` in `row`, if present and non-empty.
    pub fn get<'r>(&self, row: &'r csv::StringRecord, field: &str) -> Option<&'r str> {
        self.position(field)
            .and_then(|i| row.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Like [`ColumnIndex::get`], but a missing cell is an error.
    pub fn require<'r>(&self, row: &'r csv::StringRecord, field: &str, line: u64) -> Result<&'r str> {
        self.get(row, field)
            .ok_or_else(|| Error::Parse(format!("line {line}: empty '{field}' cell")))
    }
}

fn normalize(header: &str) -> String {
    header.trim().to_lowercase()
}
