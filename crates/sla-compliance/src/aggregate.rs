//! Per-country hit / miss statistics.

use crate::classify::ClassifiedRecord;
use sla_core::{Percentage, Size, Status};
use std::collections::BTreeMap;

/// Hit / miss totals for one country.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CountryAggregate {
    /// Full country name.
    pub country_name: String,
    /// Records classified as Hit.
    pub hit_count: Size,
    /// Records classified as Miss.
    pub miss_count: Size,
    /// `hit_count / (hit_count + miss_count) * 100`, rounded to two
    /// decimals; 0 when there are no records.
    pub hit_rate_pct: Percentage,
}

impl CountryAggregate {
    /// Build from raw counts, computing the hit rate.
    pub fn from_counts(country_name: impl Into<String>, hit_count: Size, miss_count: Size) -> Self {
        Self {
            country_name: country_name.into(),
            hit_count,
            miss_count,
            hit_rate_pct: hit_rate_pct(hit_count, miss_count),
        }
    }

    /// Total records for the country.
    pub fn total(&self) -> Size {
        self.hit_count + self.miss_count
    }
}

/// Percentage of hits, rounded half away from zero to two decimals.
pub fn hit_rate_pct(hit_count: Size, miss_count: Size) -> Percentage {
    let total = hit_count + miss_count;
    if total == 0 {
        return 0.0;
    }
    let pct = hit_count as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

/// Group classified records by country name.
///
/// One row per country present in `records`, sorted by name.  Names are
/// compared after trimming surrounding whitespace.  Countries with no
/// records do not appear.
pub fn aggregate(records: &[ClassifiedRecord]) -> Vec<CountryAggregate> {
    let mut counts: BTreeMap<&str, (Size, Size)> = BTreeMap::new();
    for r in records {
        let entry = counts.entry(r.country_name().trim()).or_default();
        match r.status {
            Status::Hit => entry.0 += 1,
            Status::Miss => entry.1 += 1,
        }
    }
    counts
        .into_iter()
        .map(|(name, (hits, misses))| CountryAggregate::from_counts(name, hits, misses))
        .collect()
}
