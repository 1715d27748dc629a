//! Lead-time classification.

use crate::repair::RepairRecord;
use sla_core::{BusinessDays, LeadTimeDays, Status};
use sla_time::{count_business_days, CountryCode, HolidaySet};

/// Classify a repair duration against its lead time.
///
/// The threshold is inclusive: a repair that takes exactly the lead time is
/// a [`Status::Hit`].
///
/// # Example
/// ```
/// use sla_compliance::classify;
/// use sla_core::Status;
///
/// assert_eq!(classify(4, 4), Status::Hit);
/// assert_eq!(classify(5, 4), Status::Miss);
/// ```
pub fn classify(business_days: BusinessDays, lead_time_days: LeadTimeDays) -> Status {
    if business_days <= lead_time_days {
        Status::Hit
    } else {
        Status::Miss
    }
}

/// A repair record with its business-day duration and SLA outcome.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ClassifiedRecord {
    /// The input record.
    #[serde(flatten)]
    pub record: RepairRecord,
    /// Business days in `[start_date, end_date]`.
    pub business_days: BusinessDays,
    /// Lead time applied.
    pub lead_time_days: LeadTimeDays,
    /// Outcome.
    pub status: Status,
}

impl ClassifiedRecord {
    /// Count business days for `record` in `country` and classify the result
    /// against `lead_time_days`.
    pub fn evaluate(
        record: RepairRecord,
        country: &CountryCode,
        holidays: &HolidaySet,
        lead_time_days: LeadTimeDays,
    ) -> Self {
        let business_days =
            count_business_days(record.start_date, record.end_date, country, holidays);
        Self {
            record,
            business_days,
            lead_time_days,
            status: classify(business_days, lead_time_days),
        }
    }

    /// Country name of the underlying record.
    pub fn country_name(&self) -> &str {
        &self.record.country_name
    }
}
