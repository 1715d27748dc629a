//! Per-country lead-time thresholds.

use sla_core::ensure;
use sla_core::errors::{Error, Result};
use sla_core::LeadTimeDays;
use std::collections::BTreeMap;

/// The SLA threshold for one country, in business days.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeadTimeEntry {
    /// Full country name (`"Austria"`).
    pub country_name: String,
    /// Maximum business days a repair may take and still be a Hit.
    pub lead_time_days: LeadTimeDays,
}

impl LeadTimeEntry {
    /// Create an entry.
    pub fn new(country_name: impl Into<String>, lead_time_days: LeadTimeDays) -> Self {
        Self {
            country_name: country_name.into(),
            lead_time_days,
        }
    }
}

/// Lookup table from country name to lead time.
///
/// There is no default threshold: a country without an entry
/// yields [`Error::MissingLeadTime`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadTimeTable {
    by_country: BTreeMap<String, LeadTimeDays>,
}

impl LeadTimeTable {
    /// Build a table from entries.
    ///
    /// Names are trimmed.  Repeating a country with the same value is
    /// tolerated.
    ///
    /// # Errors
    /// [`Error::Precondition`] for an empty name or a country repeated with a
    /// different value.
    pub fn new(entries: impl IntoIterator<Item = LeadTimeEntry>) -> Result<Self> {
        let mut by_country = BTreeMap::new();
        for entry in entries {
            let name = entry.country_name.trim().to_string();
            ensure!(!name.is_empty(), "lead-time entry with empty country name");
            if let Some(previous) = by_country.insert(name.clone(), entry.lead_time_days) {
                ensure!(
                    previous == entry.lead_time_days,
                    "conflicting lead times for '{name}': {previous} and {}",
                    entry.lead_time_days
                );
            }
        }
        Ok(Self { by_country })
    }

    /// The lead time for `country_name`.
    ///
    /// # Errors
    /// [`Error::MissingLeadTime`] if the country has no entry.
    pub fn lead_time(&self, country_name: &str) -> Result<LeadTimeDays> {
        self.by_country
            .get(country_name.trim())
            .copied()
            .ok_or_else(|| Error::MissingLeadTime {
                country: country_name.to_string(),
            })
    }

    /// Iterate `(country, lead time)` pairs in country order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, LeadTimeDays)> {
        self.by_country.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of countries configured.
    pub fn len(&self) -> usize {
        self.by_country.len()
    }

    /// Whether no country is configured.
    pub fn is_empty(&self) -> bool {
        self.by_country.is_empty()
    }
}
