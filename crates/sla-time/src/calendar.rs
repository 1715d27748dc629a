//! `Calendar` trait and the weekends-only calendar.
//!
//! A calendar knows which dates are business days.  Counting business days
//! over an interval is a provided method, so every calendar (weekends only,
//! one country's public holidays) shares one implementation of the
//! inclusive-interval rule.

use crate::date::Date;
use crate::date_range::DateRange;
use sla_core::BusinessDays;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"AT"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Count the business days in the closed interval `[start, end]`.
    ///
    /// Both endpoints are included when they are business days.  An
    /// inverted interval (`start > end`) is empty and yields 0.
    fn business_days_inclusive(&self, start: Date, end: Date) -> BusinessDays {
        DateRange::inclusive(start, end)
            .filter(|&d| self.is_business_day(d))
            .count() as BusinessDays
    }

    /// Collect the non-business days in `[from, to]`.
    ///
    /// Weekends are included only when `include_weekends` is set.
    fn holiday_list(&self, from: Date, to: Date, include_weekends: bool) -> Vec<Date> {
        DateRange::inclusive(from, to)
            .filter(|&d| self.is_holiday(d) && (include_weekends || !self.is_weekend(d)))
            .collect()
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        let sat = date(2023, 9, 2);
        assert!(!cal.is_business_day(sat));
        assert!(cal.is_holiday(sat));
        let mon = date(2023, 9, 4);
        assert!(cal.is_business_day(mon));
    }

    #[test]
    fn business_days_inclusive_counts_both_ends() {
        let cal = WeekendsOnly;
        let mon = date(2023, 9, 4);
        let fri = date(2023, 9, 8);
        assert_eq!(cal.business_days_inclusive(mon, fri), 5);
        assert_eq!(cal.business_days_inclusive(mon, mon), 1);
    }

    #[test]
    fn business_days_inclusive_inverted_is_zero() {
        let cal = WeekendsOnly;
        assert_eq!(
            cal.business_days_inclusive(date(2023, 9, 8), date(2023, 9, 4)),
            0
        );
    }

    #[test]
    fn holiday_list_weekend_toggle() {
        let cal = WeekendsOnly;
        let from = date(2023, 9, 1); // Friday
        let to = date(2023, 9, 4); // Monday
        assert!(cal.holiday_list(from, to, false).is_empty());
        assert_eq!(
            cal.holiday_list(from, to, true),
            vec![date(2023, 9, 2), date(2023, 9, 3)]
        );
    }
}
