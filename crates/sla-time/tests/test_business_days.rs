//! Business-day counting against real and generated holiday sets.

use proptest::prelude::*;
use sla_time::{
    count_business_days, Calendar, CountryCode, Date, DateRange, HolidayRecord, HolidaySet,
    WeekendsOnly,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn code(c: &str) -> CountryCode {
    CountryCode::new(c).unwrap()
}

/// Austrian public holidays for 2020 as published by the Nager.Date feed,
/// including the ones that fall on a weekend.
fn austria_2020() -> Vec<HolidayRecord> {
    [
        (1, 1),
        (1, 6),
        (4, 12),
        (4, 13),
        (5, 1),
        (5, 21),
        (5, 31),
        (6, 1),
        (6, 11),
        (8, 15),
        (10, 26),
        (11, 1),
        (12, 8),
        (12, 25),
        (12, 26),
    ]
    .into_iter()
    .map(|(m, d)| HolidayRecord::public(code("AT"), date(2020, m, d)))
    .collect()
}

/// Assert that the non-weekend holidays a calendar reports in `[from, to]`
/// are exactly `expected`.
fn check_holidays(cal: &dyn Calendar, from: Date, to: Date, expected: &[Date]) {
    let calculated = cal.holiday_list(from, to, false);
    for &d in &calculated {
        assert!(
            expected.contains(&d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for &d in expected {
        assert!(
            calculated.contains(&d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

// ─── Fixed scenarios ──────────────────────────────────────────────────────────

#[test]
fn austria_2020_weekday_holidays() {
    let holidays = HolidaySet::build(&austria_2020());
    let at = code("AT");
    let expected = [
        date(2020, 1, 1),
        date(2020, 1, 6),
        date(2020, 4, 13),
        date(2020, 5, 1),
        date(2020, 5, 21),
        date(2020, 6, 1),
        date(2020, 6, 11),
        date(2020, 10, 26),
        date(2020, 12, 8),
        date(2020, 12, 25),
    ];
    check_holidays(
        &holidays.calendar(&at),
        date(2020, 1, 1),
        date(2020, 12, 31),
        &expected,
    );
}

#[test]
fn austria_2020_full_year() {
    let holidays = HolidaySet::build(&austria_2020());
    // 262 weekdays in 2020, 10 of them public holidays.
    assert_eq!(
        count_business_days(date(2020, 1, 1), date(2020, 12, 31), &code("AT"), &holidays),
        252
    );
    assert_eq!(
        WeekendsOnly.business_days_inclusive(date(2020, 1, 1), date(2020, 12, 31)),
        262
    );
}

#[test]
fn holidays_on_weekends_change_nothing() {
    let holidays = HolidaySet::build(&austria_2020());
    // Easter Sunday (Apr 12) and Assumption Day (Sat Aug 15) fall on weekends.
    assert_eq!(
        count_business_days(date(2020, 4, 11), date(2020, 4, 12), &code("AT"), &holidays),
        0
    );
    assert_eq!(
        count_business_days(date(2020, 8, 10), date(2020, 8, 16), &code("AT"), &holidays),
        5
    );
}

#[test]
fn unknown_country_counts_weekdays_only() {
    let holidays = HolidaySet::build(&austria_2020());
    assert_eq!(
        count_business_days(date(2020, 1, 1), date(2020, 1, 7), &code("HU"), &holidays),
        5
    );
}

#[test]
fn christmas_week_in_austria() {
    let holidays = HolidaySet::build(&austria_2020());
    // Mon 21 .. Sun 27 December 2020: Fri 25 is a holiday, Sat 26 a weekend.
    assert_eq!(
        count_business_days(date(2020, 12, 21), date(2020, 12, 27), &code("AT"), &holidays),
        4
    );
}

// ─── Properties ───────────────────────────────────────────────────────────────

const BASE: (u16, u8, u8) = (2018, 1, 1);

fn offset(n: i32) -> Date {
    date(BASE.0, BASE.1, BASE.2).add_days(n).unwrap()
}

fn generated_holidays(offsets: &[i32]) -> HolidaySet {
    let records: Vec<_> = offsets
        .iter()
        .map(|&n| HolidayRecord::public(code("DE"), offset(n)))
        .collect();
    HolidaySet::build(&records)
}

proptest! {
    /// Property: extending the interval never lowers the count.
    #[test]
    fn monotone_in_end(
        start in 0i32..3000,
        len in 0i32..400,
        holiday_offsets in prop::collection::vec(0i32..3500, 0..40),
    ) {
        let holidays = generated_holidays(&holiday_offsets);
        let de = code("DE");
        let shorter = count_business_days(offset(start), offset(start + len), &de, &holidays);
        let longer = count_business_days(offset(start), offset(start + len + 1), &de, &holidays);
        prop_assert!(longer >= shorter);
        prop_assert!(longer - shorter <= 1);
    }

    /// Property: a single day counts 1 exactly when it is a weekday and not
    /// a holiday.
    #[test]
    fn single_day(
        day in 0i32..3000,
        holiday_offsets in prop::collection::vec(0i32..3000, 0..60),
    ) {
        let holidays = generated_holidays(&holiday_offsets);
        let de = code("DE");
        let d = offset(day);
        let expected = u32::from(d.weekday().is_weekday() && !holidays.contains(&de, d));
        prop_assert_eq!(count_business_days(d, d, &de, &holidays), expected);
    }

    /// Property: any seven consecutive days without holidays hold exactly
    /// five business days.
    #[test]
    fn full_week_is_five(start in 0i32..3000) {
        let holidays = HolidaySet::default();
        prop_assert_eq!(
            count_business_days(offset(start), offset(start + 6), &code("AT"), &holidays),
            5
        );
    }

    /// Property: splitting an interval splits the count.
    #[test]
    fn additive_over_split(
        start in 0i32..2000,
        left in 0i32..300,
        right in 1i32..300,
        holiday_offsets in prop::collection::vec(0i32..2600, 0..40),
    ) {
        let holidays = generated_holidays(&holiday_offsets);
        let de = code("DE");
        let mid = start + left;
        let end = mid + right;
        let whole = count_business_days(offset(start), offset(end), &de, &holidays);
        let parts = count_business_days(offset(start), offset(mid), &de, &holidays)
            + count_business_days(offset(mid + 1), offset(end), &de, &holidays);
        prop_assert_eq!(whole, parts);
    }

    /// Property: repeated calls and rebuilt sets agree.
    #[test]
    fn idempotent(
        start in 0i32..3000,
        len in 0i32..200,
        holiday_offsets in prop::collection::vec(0i32..3200, 0..40),
    ) {
        let de = code("DE");
        let first_set = generated_holidays(&holiday_offsets);
        let second_set = generated_holidays(&holiday_offsets);
        let a = count_business_days(offset(start), offset(start + len), &de, &first_set);
        let b = count_business_days(offset(start), offset(start + len), &de, &first_set);
        let c = count_business_days(offset(start), offset(start + len), &de, &second_set);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a, c);
    }

    /// Property: inverted intervals are empty.
    #[test]
    fn inverted_is_zero(start in 1i32..3000, back in 1i32..400) {
        let holidays = HolidaySet::default();
        let end = (start - back).max(0);
        prop_assume!(end < start);
        prop_assert_eq!(
            count_business_days(offset(start), offset(end), &code("SK"), &holidays),
            0
        );
    }

    /// Property: the count never exceeds the number of calendar days.
    #[test]
    fn bounded_by_calendar_days(start in 0i32..3000, len in 0i32..400) {
        let holidays = HolidaySet::default();
        let days = DateRange::inclusive(offset(start), offset(start + len)).len() as u32;
        prop_assert!(
            count_business_days(offset(start), offset(start + len), &code("CZ"), &holidays) <= days
        );
    }
}
