//! SLA outcome of a single repair.

/// Whether a repair finished within its country's lead time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Status {
    /// Completed within the lead time (inclusive).
    Hit,
    /// Took longer than the lead time.
    Miss,
}

impl Status {
    /// Return `true` for [`Status::Hit`].
    pub fn is_hit(&self) -> bool {
        matches!(self, Status::Hit)
    }

    /// Label used in output tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Hit => "Hit",
            Status::Miss => "Miss",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Hit" | "hit" | "HIT" => Ok(Status::Hit),
            "Miss" | "miss" | "MISS" => Ok(Status::Miss),
            other => Err(crate::errors::Error::Parse(format!(
                "unknown status '{other}'"
            ))),
        }
    }
}
