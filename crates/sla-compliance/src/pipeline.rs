//! Batch evaluation of repair records.
//!
//! [`evaluate`] runs the full chain for one batch: country resolution,
//! business-day counting, lead-time classification, and aggregation.
//! Failures are contained at the narrowest level that makes sense:
//!
//! * an unmapped country name skips that single record;
//! * a missing lead time skips every record of that country and is reported
//!   once as a configuration error;
//! * an inverted date interval is not a failure (0 business days).

use crate::aggregate::{aggregate, CountryAggregate};
use crate::classify::ClassifiedRecord;
use crate::lead_time::LeadTimeTable;
use crate::repair::RepairRecord;
use sla_core::{Error, Size};
use sla_time::{CountryCodeMap, HolidaySet};
use std::collections::BTreeSet;
use tracing::{debug, error, info, warn};

/// A record left out of the results, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// The record as loaded.
    pub record: RepairRecord,
    /// Why it was not classified.
    pub reason: Error,
}

/// Everything one batch produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Classified records in input order.
    pub classified: Vec<ClassifiedRecord>,
    /// Per-country totals, sorted by country name.
    pub aggregates: Vec<CountryAggregate>,
    /// Records that could not be classified.
    pub skipped: Vec<SkippedRecord>,
    /// Configuration problems, one per affected country, in the order they
    /// were first hit.
    pub configuration_errors: Vec<Error>,
}

impl RunReport {
    /// Number of input records seen.
    pub fn total_records(&self) -> Size {
        self.classified.len() + self.skipped.len()
    }

    /// Whether every input record was classified.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.configuration_errors.is_empty()
    }
}

/// Classify and aggregate a batch of repair records.
///
/// `holidays` must already hold the public holidays of every country the
/// batch touches; a country without entries is treated as having none.
pub fn evaluate(
    repairs: impl IntoIterator<Item = RepairRecord>,
    holidays: &HolidaySet,
    countries: &CountryCodeMap,
    lead_times: &LeadTimeTable,
) -> RunReport {
    let mut report = RunReport::default();
    let mut misconfigured: BTreeSet<String> = BTreeSet::new();

    for record in repairs {
        let code = match countries.code_for(&record.country_name) {
            Ok(code) => code,
            Err(reason) => {
                warn!(
                    id = %record.id,
                    country = %record.country_name,
                    "skipping repair record: {reason}"
                );
                report.skipped.push(SkippedRecord { record, reason });
                continue;
            }
        };

        let lead_time = match lead_times.lead_time(&record.country_name) {
            Ok(days) => days,
            Err(reason) => {
                if misconfigured.insert(record.country_name.trim().to_string()) {
                    error!(country = %record.country_name, "{reason}");
                    report.configuration_errors.push(reason.clone());
                }
                report.skipped.push(SkippedRecord { record, reason });
                continue;
            }
        };

        if record.is_inverted() {
            debug!(
                id = %record.id,
                start = %record.start_date,
                end = %record.end_date,
                "end date precedes start date; counting 0 business days"
            );
        }

        report
            .classified
            .push(ClassifiedRecord::evaluate(record, code, holidays, lead_time));
    }

    report.aggregates = aggregate(&report.classified);
    info!(
        classified = report.classified.len(),
        skipped = report.skipped.len(),
        countries = report.aggregates.len(),
        "evaluated repair batch"
    );
    report
}
