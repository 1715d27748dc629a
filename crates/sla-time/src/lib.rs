//! # sla-time
//!
//! Date, weekday, country, holiday-set, and business-day types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day counting over a closed interval.
pub mod business_days;

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// ISO country codes and the country-name table.
pub mod country;

/// `Date` type.
pub mod date;

/// Inclusive date iteration.
pub mod date_range;

/// Per-country public-holiday sets.
pub mod holiday_set;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_days::count_business_days;
pub use calendar::{Calendar, WeekendsOnly};
pub use country::{CountryCode, CountryCodeMap};
pub use date::Date;
pub use date_range::DateRange;
pub use holiday_set::{CountryCalendar, HolidayCount, HolidayRecord, HolidaySet};
pub use weekday::Weekday;
