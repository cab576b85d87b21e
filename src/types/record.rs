//! Record-related types for the transaction reporter
//!
//! This module defines the per-row record produced by the record source and
//! the typed views (status, amount) the accumulator derives from it.

use serde::Deserialize;

/// Monetary amount in minor currency units (e.g. cents)
///
/// Signed: negative values are refunds or adjustments and are summed as-is.
pub type Amount = i64;

/// Transaction status as observed in the `status` column
///
/// The source data does not enforce an enum, so anything that is not an exact
/// match for one of the two recognised literals (after trimming) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Literal `completed`
    Completed,

    /// Literal `failed`
    Failed,

    /// Any other value, including empty or missing
    Other,
}

impl Status {
    /// Classify a raw status value
    ///
    /// Matching is exact and case-sensitive after trimming surrounding
    /// whitespace; `None` is treated as the empty string.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim).unwrap_or_default() {
            "completed" => Status::Completed,
            "failed" => Status::Failed,
            _ => Status::Other,
        }
    }
}

/// One input row, as produced by the record source
///
/// Only the recognised columns are kept; every other column in the file is
/// ignored during deserialization. Values are passed through untouched. An
/// absent column, a missing trailing field and an empty field all arrive as
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    /// Raw `status` column
    #[serde(default)]
    pub status: Option<String>,

    /// Raw `amount_cents` column
    #[serde(default)]
    pub amount_cents: Option<String>,
}

impl RawRecord {
    /// Build a record from optional raw values
    pub fn new(status: Option<&str>, amount_cents: Option<&str>) -> Self {
        Self {
            status: status.map(str::to_string),
            amount_cents: amount_cents.map(str::to_string),
        }
    }

    /// Typed view of the status column
    pub fn status(&self) -> Status {
        Status::from_raw(self.status.as_deref())
    }
}
