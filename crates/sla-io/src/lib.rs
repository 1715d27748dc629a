//! # sla-io
//!
//! Everything that touches files or the network: holiday feeds, the repair
//! and lead-time tables, and the CSV reports.
//!
//! Errors from `csv`, `serde_json`, `reqwest` and `std::io` are folded into
//! [`sla_core::Error`] here, so callers only ever see the workspace error
//! type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Cell conversions and error mapping.
pub mod cells;

/// Holiday feed sources.
pub mod holiday_source;

/// Repair and lead-time loaders.
pub mod loaders;

/// Nager.Date API and JSON export.
pub mod nager;

/// Header-alias schemas.
pub mod schema;

/// CSV report writers.
pub mod writers;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use holiday_source::{
    parse_holiday_csv, source_for_path, CsvFileSource, FallbackSource, HolidaySource,
};
pub use loaders::{load_lead_times, load_repairs, read_lead_times, read_repairs};
pub use nager::{parse_nager_json, JsonFileSource, NagerApiSource, NAGER_API_BASE};
pub use schema::{ColumnIndex, ColumnSchema, FieldSpec};
pub use writers::{
    write_aggregates, write_classified, write_file, write_holiday_counts, write_holidays,
};
