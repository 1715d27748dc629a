//! # repair-sla
//!
//! Business-day SLA compliance for repair work orders.
//!
//! This crate is a **façade** that re-exports the workspace crates and
//! hosts the batch driver behind the `repair-sla` binary. Application code
//! should depend on this crate rather than the individual `sla-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use repair_sla::compliance::{evaluate, LeadTimeEntry, LeadTimeTable, RepairRecord};
//! use repair_sla::core::Status;
//! use repair_sla::time::{CountryCode, CountryCodeMap, Date, HolidayRecord, HolidaySet};
//!
//! let at = CountryCode::new("AT").unwrap();
//! let new_year = Date::from_ymd(2020, 1, 1).unwrap();
//! let holidays = HolidaySet::build(&[HolidayRecord::public(at, new_year)]);
//! let lead_times = LeadTimeTable::new([LeadTimeEntry::new("Austria", 4)]).unwrap();
//!
//! let repair = RepairRecord::new("A-1", "Austria", new_year, Date::from_ymd(2020, 1, 7).unwrap());
//! let report = evaluate([repair], &holidays, &CountryCodeMap::default(), &lead_times);
//!
//! assert_eq!(report.classified[0].business_days, 4);
//! assert_eq!(report.classified[0].status, Status::Hit);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Batch driver: load, evaluate, write.
pub mod app;

/// Error definitions, the Hit / Miss status, numeric aliases.
pub use sla_core as core;

/// Dates, weekdays, country codes, holiday sets, business days.
pub use sla_time as time;

/// Repair records, classification, aggregation.
pub use sla_compliance as compliance;

/// Holiday sources, loaders, CSV writers.
pub use sla_io as io;
