//! # sla-compliance
//!
//! Repair records, lead-time classification, and per-country aggregation.
//!
//! The crate is a set of pure functions over immutable values: build a
//! [`HolidaySet`](sla_time::HolidaySet) once, then pass it together with
//! the records, the country table, and the lead-time table to
//! [`evaluate`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Per-country hit / miss statistics.
pub mod aggregate;

/// Lead-time classification.
pub mod classify;

/// Per-country lead-time thresholds.
pub mod lead_time;

/// Batch evaluation.
pub mod pipeline;

/// Repair work orders.
pub mod repair;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use aggregate::{aggregate, hit_rate_pct, CountryAggregate};
pub use classify::{classify, ClassifiedRecord};
pub use lead_time::{LeadTimeEntry, LeadTimeTable};
pub use pipeline::{evaluate, RunReport, SkippedRecord};
pub use repair::RepairRecord;
