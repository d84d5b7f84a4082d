//! Record identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a record.
///
/// Integer on the wire; serializes transparently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Creates a record ID from its raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use registrar_core::RecordId;
    ///
    /// let id = RecordId::new(10);
    /// assert_eq!(id.get(), 10);
    /// ```
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
