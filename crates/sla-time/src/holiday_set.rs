//! Per-country public-holiday sets.
//!
//! A [`HolidaySet`] is built once from a feed of [`HolidayRecord`]s and is
//! read-only afterwards.  [`HolidaySet::calendar`] exposes one country's
//! holidays as a [`Calendar`], which is how business days are counted.

use crate::calendar::Calendar;
use crate::country::CountryCode;
use crate::date::Date;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One entry of a holiday feed.
///
/// Only `country_code`, `date` and `is_public` take part in business-day
/// counting; the names and type list are carried through for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct HolidayRecord {
    /// Country the holiday applies to.
    pub country_code: CountryCode,
    /// Date of the holiday.
    pub date: Date,
    /// Whether this is a public (nationwide, non-working) holiday.
    pub is_public: bool,
    /// Name in the country's language (`"Neujahr"`).
    #[serde(default)]
    pub local_name: Option<String>,
    /// English name (`"New Year's Day"`).
    #[serde(default)]
    pub name: Option<String>,
    /// Holiday categories as published (`"Public"`, `"Bank"`, ...).
    #[serde(default)]
    pub types: Vec<String>,
}

impl HolidayRecord {
    /// A record without names or categories.
    pub fn new(country_code: CountryCode, date: Date, is_public: bool) -> Self {
        Self {
            country_code,
            date,
            is_public,
            local_name: None,
            name: None,
            types: Vec::new(),
        }
    }

    /// A public holiday.
    pub fn public(country_code: CountryCode, date: Date) -> Self {
        Self::new(country_code, date, true)
    }

    /// Attach the local and English names.
    pub fn with_names(mut self, local_name: Option<String>, name: Option<String>) -> Self {
        self.local_name = local_name;
        self.name = name;
        self
    }

    /// Attach the category list.
    pub fn with_types(mut self, types: Vec<String>) -> Self {
        self.types = types;
        self
    }
}

/// Number of distinct public-holiday dates a country has in one year.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct HolidayCount {
    /// Country code.
    pub country_code: CountryCode,
    /// Calendar year.
    pub year: u16,
    /// Distinct holiday dates in that year.
    pub holiday_count: usize,
}

/// Immutable mapping from country code to its set of public-holiday dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    by_country: HashMap<CountryCode, HashSet<Date>>,
}

impl HolidaySet {
    /// Build a holiday set from a feed.
    ///
    /// Non-public records are dropped and duplicate dates within a country
    /// collapse to one entry.  An empty feed is legal and yields a set in
    /// which nothing is a holiday.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a HolidayRecord>) -> Self {
        let mut by_country: HashMap<CountryCode, HashSet<Date>> = HashMap::new();
        for r in records.into_iter().filter(|r| r.is_public) {
            by_country
                .entry(r.country_code.clone())
                .or_default()
                .insert(r.date);
        }
        Self { by_country }
    }

    /// Return `true` if `date` is a public holiday in `country`.
    ///
    /// Unknown countries have no holidays.
    pub fn contains(&self, country: &CountryCode, date: Date) -> bool {
        self.by_country
            .get(country)
            .is_some_and(|dates| dates.contains(&date))
    }

    /// The holiday dates of `country`, sorted ascending.
    pub fn dates(&self, country: &CountryCode) -> Vec<Date> {
        let mut dates: Vec<Date> = self
            .by_country
            .get(country)
            .map(|d| d.iter().copied().collect())
            .unwrap_or_default();
        dates.sort_unstable();
        dates
    }

    /// Countries with at least one holiday, sorted.
    pub fn countries(&self) -> Vec<&CountryCode> {
        let mut codes: Vec<_> = self.by_country.keys().collect();
        codes.sort_unstable();
        codes
    }

    /// Total number of (country, date) holiday entries.
    pub fn len(&self) -> usize {
        self.by_country.values().map(HashSet::len).sum()
    }

    /// Whether no country has any holiday.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A calendar view of one country: weekends plus that country's
    /// holidays are non-business days.
    pub fn calendar<'a>(&'a self, country: &'a CountryCode) -> CountryCalendar<'a> {
        CountryCalendar {
            country,
            holidays: self.by_country.get(country),
        }
    }

    /// Distinct holiday dates per country per year, sorted by country and
    /// then year.
    pub fn holiday_counts(&self) -> Vec<HolidayCount> {
        let mut counts: BTreeMap<(&CountryCode, u16), usize> = BTreeMap::new();
        for (code, dates) in &self.by_country {
            for d in dates {
                *counts.entry((code, d.year())).or_default() += 1;
            }
        }
        counts
            .into_iter()
            .map(|((code, year), holiday_count)| HolidayCount {
                country_code: code.clone(),
                year,
                holiday_count,
            })
            .collect()
    }
}

/// One country's business-day calendar, borrowed from a [`HolidaySet`].
#[derive(Debug, Clone, Copy)]
pub struct CountryCalendar<'a> {
    country: &'a CountryCode,
    holidays: Option<&'a HashSet<Date>>,
}

impl CountryCalendar<'_> {
    /// Number of holidays on record for this country.
    pub fn holiday_count(&self) -> usize {
        self.holidays.map_or(0, HashSet::len)
    }
}

impl Calendar for CountryCalendar<'_> {
    fn name(&self) -> &str {
        self.country.as_str()
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.is_some_and(|h| h.contains(&date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn code(c: &str) -> CountryCode {
        CountryCode::new(c).unwrap()
    }

    #[test]
    fn empty_set_is_weekends_only() {
        let set = HolidaySet::build(std::iter::empty());
        assert!(set.is_empty());
        let at = code("AT");
        let cal = set.calendar(&at);
        assert_eq!(cal.name(), "AT");
        assert!(cal.is_business_day(date(2024, 1, 8))); // Monday
        assert!(!cal.is_business_day(date(2024, 1, 6))); // Saturday
        assert_eq!(cal.holiday_count(), 0);
    }

    #[test]
    fn drops_non_public_and_duplicates() {
        let records = vec![
            HolidayRecord::public(code("DE"), date(2024, 12, 25)),
            HolidayRecord::public(code("DE"), date(2024, 12, 25)),
            HolidayRecord::new(code("DE"), date(2024, 10, 31), false),
        ];
        let set = HolidaySet::build(&records);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&code("DE"), date(2024, 12, 25)));
        assert!(!set.contains(&code("DE"), date(2024, 10, 31)));
    }

    #[test]
    fn countries_are_partitioned() {
        let records = vec![
            HolidayRecord::public(code("AT"), date(2024, 1, 6)),
            HolidayRecord::public(code("SK"), date(2024, 9, 1)),
        ];
        let set = HolidaySet::build(&records);
        assert!(set.contains(&code("AT"), date(2024, 1, 6)));
        assert!(!set.contains(&code("SK"), date(2024, 1, 6)));
        assert!(!set.contains(&code("CZ"), date(2024, 1, 6)));
        let countries: Vec<_> = set.countries().into_iter().map(CountryCode::as_str).collect();
        assert_eq!(countries, vec!["AT", "SK"]);
    }

    #[test]
    fn dates_are_sorted() {
        let records = vec![
            HolidayRecord::public(code("CZ"), date(2024, 12, 26)),
            HolidayRecord::public(code("CZ"), date(2024, 1, 1)),
            HolidayRecord::public(code("CZ"), date(2024, 5, 8)),
        ];
        let set = HolidaySet::build(&records);
        assert_eq!(
            set.dates(&code("CZ")),
            vec![date(2024, 1, 1), date(2024, 5, 8), date(2024, 12, 26)]
        );
        assert!(set.dates(&code("DE")).is_empty());
    }

    #[test]
    fn counts_per_country_and_year() {
        let records = vec![
            HolidayRecord::public(code("DE"), date(2020, 1, 1)),
            HolidayRecord::public(code("AT"), date(2021, 1, 1)),
            HolidayRecord::public(code("AT"), date(2020, 1, 6)),
            HolidayRecord::public(code("AT"), date(2020, 1, 1)),
            HolidayRecord::public(code("AT"), date(2020, 1, 1)),
        ];
        let counts = HolidaySet::build(&records).holiday_counts();
        let flat: Vec<_> = counts
            .iter()
            .map(|c| (c.country_code.as_str(), c.year, c.holiday_count))
            .collect();
        assert_eq!(
            flat,
            vec![("AT", 2020, 2), ("AT", 2021, 1), ("DE", 2020, 1)]
        );
    }

    #[test]
    fn builds_are_independent() {
        let mut records = vec![HolidayRecord::public(code("AT"), date(2020, 1, 1))];
        let first = HolidaySet::build(&records);
        records.push(HolidayRecord::public(code("AT"), date(2020, 1, 6)));
        let second = HolidaySet::build(&records);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }
}
