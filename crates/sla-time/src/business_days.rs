//! Business-day counting against a country's public holidays.
//!
//! A business day is a Monday–Friday that is not in the country's holiday
//! set.  Intervals are closed: both `start` and `end` count when they are
//! business days.

use crate::calendar::Calendar;
use crate::country::CountryCode;
use crate::date::Date;
use crate::holiday_set::HolidaySet;
use sla_core::BusinessDays;

/// Count the business days in `[start, end]` for `country`.
///
/// * A country absent from `holidays` has no holidays; weekends are still
///   excluded.
/// * An inverted interval (`start > end`) yields 0 rather than an error, so
///   malformed repair rows degrade into a visible result instead of
///   aborting a batch.
///
/// The function is pure: the same inputs always give the same count.
///
/// # Example
/// ```
/// use sla_time::{count_business_days, CountryCode, Date, HolidayRecord, HolidaySet};
///
/// let at = CountryCode::new("AT").unwrap();
/// let new_year = Date::from_ymd(2020, 1, 1).unwrap();
/// let holidays = HolidaySet::build(&[HolidayRecord::public(at.clone(), new_year)]);
///
/// let end = Date::from_ymd(2020, 1, 7).unwrap();
/// assert_eq!(count_business_days(new_year, new_year, &at, &holidays), 0);
/// assert_eq!(count_business_days(new_year, end, &at, &holidays), 4);
/// ```
pub fn count_business_days(
    start: Date,
    end: Date,
    country: &CountryCode,
    holidays: &HolidaySet,
) -> BusinessDays {
    holidays.calendar(country).business_days_inclusive(start, end)
}
