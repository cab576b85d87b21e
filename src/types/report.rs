//! Report types for the transaction reporter
//!
//! The structured report couples the business summary with observability
//! counters about the ingestion pass itself. Both halves are immutable once
//! assembled.

use super::record::Amount;
use serde::Serialize;

/// Business summary of one pass over the input
///
/// This is also the flat shape returned by `generate_report`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of data rows observed
    pub total_rows: u64,

    /// Rows whose status is exactly `completed`
    pub completed: u64,

    /// Rows whose status is exactly `failed`
    pub failed: u64,

    /// Sum of amounts over completed rows
    pub sum_completed_amount: Amount,

    /// Mean amount over all rows, `0.0` when there are none
    pub avg_amount: f64,
}

/// Metadata about the ingestion pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observability {
    /// Records pulled from the source
    pub rows_read: u64,

    /// Records whose amount was non-numeric and coerced to zero
    pub invalid_amounts: u64,

    /// Elapsed time for ingestion plus aggregation
    pub duration_seconds: f64,
}

/// Immutable snapshot produced once the pass is finalized
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredReport {
    pub summary: Summary,
    pub observability: Observability,
}

impl StructuredReport {
    /// Flat projection holding only the summary fields
    pub fn into_summary(self) -> Summary {
        self.summary
    }
}
