//! ISO-3166 country codes and the country-name table.

use sla_core::ensure;
use sla_core::errors::{Error, Result};
use std::collections::BTreeMap;

/// An ISO-3166 alpha-2 country code (`"AT"`, `"DE"`, …).
///
/// Always two upper-case ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Validate and normalise a code.  Lower-case input is upper-cased.
    pub fn new(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidArgument(format!(
                "'{code}' is not an ISO-3166 alpha-2 country code"
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CountryCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for CountryCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Fixed bijection between full country names and ISO codes.
///
/// Repair data names countries in full (`"Germany"`); holiday data uses
/// codes (`"DE"`).  [`CountryCodeMap::default`] is the four-country table
/// the service operates in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCodeMap {
    by_name: BTreeMap<String, CountryCode>,
    by_code: BTreeMap<CountryCode, String>,
}

impl CountryCodeMap {
    /// Build a map from `(name, code)` pairs.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if a code is invalid;
    /// [`Error::Precondition`] if a name or code appears twice (the table
    /// must stay a bijection).
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut by_name = BTreeMap::new();
        let mut by_code = BTreeMap::new();
        for (name, code) in entries {
            let name = name.trim().to_string();
            let code = CountryCode::new(code)?;
            ensure!(!by_name.contains_key(&name), "country '{name}' mapped twice");
            ensure!(!by_code.contains_key(&code), "country code {code} mapped twice");
            by_name.insert(name.clone(), code.clone());
            by_code.insert(code, name);
        }
        Ok(Self { by_name, by_code })
    }

    /// Resolve a full country name to its code.
    ///
    /// Surrounding whitespace in `name` is ignored.
    ///
    /// # Errors
    /// [`Error::MissingCountryMapping`] if the name is not in the table.
    pub fn code_for(&self, name: &str) -> Result<&CountryCode> {
        self.by_name
            .get(name.trim())
            .ok_or_else(|| Error::MissingCountryMapping {
                country: name.to_string(),
            })
    }

    /// Reverse lookup: the full name for a code.
    pub fn name_for(&self, code: &CountryCode) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }

    /// All codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &CountryCode> {
        self.by_code.keys()
    }

    /// Number of countries in the table.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for CountryCodeMap {
    fn default() -> Self {
        let by_name: BTreeMap<String, CountryCode> = [
            ("Slovakia", "SK"),
            ("Czechia", "CZ"),
            ("Austria", "AT"),
            ("Germany", "DE"),
        ]
        .into_iter()
        .map(|(name, code)| (name.to_string(), CountryCode(code.to_string())))
        .collect();
        let by_code = by_name
            .iter()
            .map(|(name, code)| (code.clone(), name.clone()))
            .collect();
        Self { by_name, by_code }
    }
}
