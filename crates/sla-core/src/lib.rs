//! # sla-core
//!
//! Core types and error definitions for repair-sla.
//!
//! This crate provides the building blocks shared across the other crates
//! in the workspace: the error enum with its `ensure!` macro,
//! the [`Status`] outcome, numeric aliases, and string parsers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// String parsing helpers.
pub mod parsers;

/// Hit / Miss outcome.
pub mod status;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A count of business days.
pub type BusinessDays = u32;

/// A lead-time threshold expressed in business days.
pub type LeadTimeDays = u32;

/// A percentage in `[0, 100]`.
pub type Percentage = f64;

/// Alias used for record counts.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use status::Status;
