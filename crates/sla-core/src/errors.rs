//! Error types for repair-sla.
//!
//! Every crate in the workspace reports failures through the single
//! `thiserror`-derived [`Error`] enum defined here.  The [`ensure!`] macro
//! provides early returns for violated preconditions on configuration
//! tables.
//!
//! [`ensure!`]: crate::ensure

use thiserror::Error;

/// The top-level error type used throughout repair-sla.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Inconsistent configuration table (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A repair record names a country with no ISO code in the country map.
    #[error("no country code mapping for country '{country}'")]
    MissingCountryMapping {
        /// The unresolved country name, as written in the record.
        country: String,
    },

    /// A country has repair records but no lead-time entry.
    #[error("no lead time configured for country '{country}'")]
    MissingLeadTime {
        /// The country name lacking a lead time.
        country: String,
    },

    /// Malformed input data (bad header, bad cell, bad JSON).
    #[error("parse error: {0}")]
    Parse(String),

    /// Underlying I/O failure, flattened to its message.
    #[error("I/O error: {0}")]
    Io(String),

    /// No holiday source produced usable data.
    #[error("holiday source error: {0}")]
    HolidaySource(String),
}

impl Error {
    /// Return `true` for errors that concern a single record and should not
    /// abort a batch.
    pub fn is_record_level(&self) -> bool {
        matches!(self, Error::MissingCountryMapping { .. })
    }

    /// Return `true` for errors caused by missing or inconsistent
    /// configuration (lead-time tables, country maps).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::MissingLeadTime { .. } | Error::Precondition(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Shorthand `Result` type used throughout repair-sla.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sla_core::{ensure, errors::Error};
/// fn non_negative(x: i64) -> sla_core::errors::Result<i64> {
///     ensure!(x >= 0, "x must be non-negative, got {x}");
///     Ok(x)
/// }
/// assert!(non_negative(1).is_ok());
/// assert!(non_negative(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
