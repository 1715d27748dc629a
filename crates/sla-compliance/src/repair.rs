//! Repair work orders.

use sla_time::Date;

/// One repair work order as loaded from the input table.
///
/// `start_date <= end_date` is expected; an inverted pair counts 0 business
/// days and therefore classifies as a Hit for any lead time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RepairRecord {
    /// Work-order identifier.
    pub id: String,
    /// Full country name (`"Germany"`), resolved through a
    /// [`CountryCodeMap`](sla_time::CountryCodeMap).
    pub country_name: String,
    /// First day of the repair.
    pub start_date: Date,
    /// Last day of the repair.
    pub end_date: Date,
}

impl RepairRecord {
    /// Create a record.  Surrounding whitespace is stripped from the id and
    /// the country name.
    pub fn new(
        id: impl Into<String>,
        country_name: impl Into<String>,
        start_date: Date,
        end_date: Date,
    ) -> Self {
        Self {
            id: id.into().trim().to_string(),
            country_name: country_name.into().trim().to_string(),
            start_date,
            end_date,
        }
    }

    /// Whether the end date precedes the start date.
    pub fn is_inverted(&self) -> bool {
        self.end_date < self.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_names() {
        let d = Date::from_ymd(2021, 6, 1).unwrap();
        let r = RepairRecord::new(" R-9 ", "\tGermany ", d, d);
        assert_eq!(r.id, "R-9");
        assert_eq!(r.country_name, "Germany");
        assert!(!r.is_inverted());
    }
}
