//! Nager.Date holiday feeds: the `PublicHolidays` REST endpoint and its
//! JSON export on disk.
//!
//! Both carry the same document, an array of objects like
//!
//! ```json
//! {"date":"2020-01-01","localName":"Neujahr","name":"New Year's Day",
//!  "countryCode":"AT","types":["Public"]}
//! ```

use crate::cells::{json_error, parse_date_cell};
use crate::holiday_source::{open, HolidaySource, PUBLIC};
use sla_core::ensure;
use sla_core::errors::{Error, Result};
use sla_time::{CountryCode, HolidayRecord};
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Public endpoint of the `PublicHolidays` API.
pub const NAGER_API_BASE: &str = "https://date.nager.at/api/v3/PublicHolidays";

/// Per-request timeout of [`NagerApiSource`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Years fetched when none are given.
pub const DEFAULT_YEARS: std::ops::RangeInclusive<u16> = 2020..=2025;

// ── Wire format ───────────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NagerHoliday {
    date: String,
    country_code: String,
    #[serde(default)]
    local_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default, rename = "type")]
    legacy_type: Option<String>,
}

impl NagerHoliday {
    fn into_record(self) -> Result<HolidayRecord> {
        let types = match self.legacy_type {
            Some(t) if self.types.is_empty() => vec![t],
            _ => self.types,
        };
        let is_public = types.iter().any(|t| t == PUBLIC);
        Ok(HolidayRecord::new(
            CountryCode::new(&self.country_code)?,
            parse_date_cell(&self.date)?,
            is_public,
        )
        .with_names(self.local_name, self.name)
        .with_types(types))
    }
}

fn into_records(raw: Vec<NagerHoliday>) -> Vec<HolidayRecord> {
    let mut out = Vec::with_capacity(raw.len());
    for (i, h) in raw.into_iter().enumerate() {
        match h.into_record() {
            Ok(r) => out.push(r),
            Err(e) => warn!(entry = i, "dropping holiday: {e}"),
        }
    }
    out
}

/// Parse a Nager.Date `PublicHolidays` JSON array.
///
/// Holidays whose `types` list does not contain `"Public"` are kept with
/// `is_public = false`.
///
/// # Errors
/// [`Error::Parse`] if the document is not a JSON array of holiday objects.
pub fn parse_nager_json<R: Read>(reader: R) -> Result<Vec<HolidayRecord>> {
    let raw: Vec<NagerHoliday> = serde_json::from_reader(reader).map_err(json_error)?;
    Ok(into_records(raw))
}

// ── JSON export on disk ───────────────────────────────────────────────────────

/// A Nager.Date JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    /// Source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("json:{}", path.display());
        Self { path, name }
    }
}

impl HolidaySource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<Vec<HolidayRecord>> {
        let file = open(&self.path)?;
        let records = parse_nager_json(BufReader::new(file))?;
        info!(source = %self.name, records = records.len(), "loaded holidays");
        Ok(records)
    }
}

// ── REST endpoint ─────────────────────────────────────────────────────────────

/// The `PublicHolidays/{year}/{country}` endpoint, queried once per country
/// and year.
///
/// The fetch is all-or-nothing: a transport error, a timeout or any status
/// other than `200 OK` fails the whole fetch, so a [`FallbackSource`]
/// never sees a partial feed.
///
/// [`FallbackSource`]: crate::holiday_source::FallbackSource
#[derive(Debug, Clone)]
pub struct NagerApiSource {
    base_url: String,
    countries: Vec<CountryCode>,
    years: Vec<u16>,
    http: reqwest::blocking::Client,
    name: String,
}

impl NagerApiSource {
    /// Source querying `base_url` with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    /// [`Error::Precondition`] if `countries` or `years` is empty.
    pub fn new(
        base_url: impl Into<String>,
        countries: Vec<CountryCode>,
        years: Vec<u16>,
    ) -> Result<Self> {
        Self::with_timeout(base_url, countries, years, DEFAULT_TIMEOUT)
    }

    /// Like [`NagerApiSource::new`] with an explicit per-request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        countries: Vec<CountryCode>,
        years: Vec<u16>,
        timeout: Duration,
    ) -> Result<Self> {
        ensure!(!countries.is_empty(), "holiday API needs at least one country");
        ensure!(!years.is_empty(), "holiday API needs at least one year");
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HolidaySource(format!("cannot build HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let name = format!("api:{base_url}");
        Ok(Self {
            base_url,
            countries,
            years,
            http,
            name,
        })
    }

    /// URL of one country-year page.
    pub fn url_for(&self, year: u16, country: &CountryCode) -> String {
        format!("{}/{year}/{country}", self.base_url)
    }

    fn fetch_page(&self, year: u16, country: &CountryCode) -> Result<Vec<HolidayRecord>> {
        let url = self.url_for(year, country);
        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|e| request_error(&url, e))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::HolidaySource(format!(
                "{url}: HTTP {}",
                status.as_u16()
            )));
        }

        let raw: Vec<NagerHoliday> = resp.json().map_err(|e| request_error(&url, e))?;
        Ok(into_records(raw))
    }
}

impl HolidaySource for NagerApiSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<Vec<HolidayRecord>> {
        let mut out = Vec::new();
        for country in &self.countries {
            for &year in &self.years {
                let page = self.fetch_page(year, country)?;
                debug!(%country, year, records = page.len(), "fetched holiday page");
                out.extend(page);
            }
        }
        info!(source = %self.name, records = out.len(), "loaded holidays");
        Ok(out)
    }
}

fn request_error(url: &str, e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::HolidaySource(format!("{url}: request timed out"))
    } else if e.is_decode() {
        Error::Parse(format!("{url}: {e}"))
    } else {
        Error::HolidaySource(format!("{url}: {e}"))
    }
}
