//! The end-to-end batch run.

use anyhow::Context;
use sla_compliance::{evaluate, RunReport};
use sla_io::writers::{AGGREGATES_FILE, CLASSIFIED_FILE, HOLIDAYS_FILE, HOLIDAY_COUNTS_FILE};
use sla_io::nager::DEFAULT_YEARS;
use sla_io::{
    load_lead_times, load_repairs, source_for_path, write_aggregates, write_classified,
    write_file, write_holiday_counts, write_holidays, FallbackSource, HolidaySource,
    NagerApiSource, NAGER_API_BASE,
};
use sla_time::{CountryCode, CountryCodeMap, HolidaySet};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// Which pages of the Nager.Date API to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Endpoint up to, not including, `/{year}/{country}`.
    pub base_url: String,
    /// Countries to query.
    pub countries: Vec<CountryCode>,
    /// Years to query.
    pub years: Vec<u16>,
}

impl Default for ApiConfig {
    /// The public endpoint, the four service countries, 2020 to 2025.
    fn default() -> Self {
        Self {
            base_url: NAGER_API_BASE.to_string(),
            countries: CountryCodeMap::default().codes().cloned().collect(),
            years: DEFAULT_YEARS.collect(),
        }
    }
}

/// Inputs and output location of one run.
///
/// Holiday sources are tried in order: the API, `holidays`, then
/// `holidays_fallback`.  At least one must be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Nager.Date API query; `None` for an offline run.
    pub api: Option<ApiConfig>,
    /// Holiday file (`.json` or `.csv`).
    pub holidays: Option<PathBuf>,
    /// Holiday file used when everything before it is unusable.
    pub holidays_fallback: Option<PathBuf>,
    /// Repair records table.
    pub repairs: PathBuf,
    /// Lead-time table.
    pub lead_times: PathBuf,
    /// Directory the four reports are written to; created if missing.
    pub out_dir: PathBuf,
}

/// Build the holiday source chain described by `config`.
pub fn holiday_source(config: &RunConfig) -> anyhow::Result<Box<dyn HolidaySource>> {
    let mut chain: Vec<Box<dyn HolidaySource>> = Vec::new();
    if let Some(api) = &config.api {
        chain.push(Box::new(NagerApiSource::new(
            api.base_url.as_str(),
            api.countries.clone(),
            api.years.clone(),
        )?));
    }
    for path in config.holidays.iter().chain(&config.holidays_fallback) {
        chain.push(source_for_path(path)?);
    }

    let last = chain
        .pop()
        .context("no holiday source configured (need the API or a holiday file)")?;
    Ok(chain.into_iter().rev().fold(last, |fallback, primary| {
        Box::new(FallbackSource::new(primary, fallback)) as Box<dyn HolidaySource>
    }))
}

/// Load every input, evaluate the batch, and write the reports.
///
/// Unreadable inputs abort the run.  Per-country configuration errors are
/// logged and returned inside the report.
pub fn run(config: &RunConfig) -> anyhow::Result<RunReport> {
    let source = holiday_source(config)?;
    let feed = source
        .fetch()
        .with_context(|| format!("loading holidays from {}", source.name()))?;
    let holidays = HolidaySet::build(&feed);
    info!(
        countries = holidays.countries().len(),
        dates = holidays.len(),
        "built holiday set"
    );

    let repairs = load_repairs(&config.repairs)
        .with_context(|| format!("loading repairs from {}", config.repairs.display()))?;
    let lead_times = load_lead_times(&config.lead_times)
        .with_context(|| format!("loading lead times from {}", config.lead_times.display()))?;

    let report = evaluate(repairs, &holidays, &CountryCodeMap::default(), &lead_times);
    for e in &report.configuration_errors {
        error!("configuration error: {e}");
    }

    let out = &config.out_dir;
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    write_file(&out.join(HOLIDAYS_FILE), |w| write_holidays(w, &feed))?;
    write_file(&out.join(HOLIDAY_COUNTS_FILE), |w| {
        write_holiday_counts(w, &holidays.holiday_counts())
    })?;
    write_file(&out.join(CLASSIFIED_FILE), |w| {
        write_classified(w, &report.classified)
    })?;
    write_file(&out.join(AGGREGATES_FILE), |w| {
        write_aggregates(w, &report.aggregates)
    })?;

    info!(out_dir = %out.display(), "reports written");
    Ok(report)
}
