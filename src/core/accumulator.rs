//! Single-pass accumulator
//!
//! This module provides the [`Accumulator`] that folds records into running
//! totals, strictly in input order. It is an explicit value owned by the loop
//! driving the pass, so independent reports never share state.
//!
//! Counters only ever increase. Once the pass is complete the accumulator is
//! consumed by the report assembler.

use crate::core::coercion::coerce_amount;
use crate::types::{Amount, RawRecord, Status, Summary};
use log::debug;

/// Running totals for one pass over the record source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    total_rows: u64,
    completed_count: u64,
    failed_count: u64,
    sum_completed_amount: Amount,
    sum_all_amount: Amount,
    invalid_amount_count: u64,
}

impl Accumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the running totals
    ///
    /// Malformed amounts never abort the pass: they count as zero and bump
    /// the invalid-amount counter. Sums saturate at the `i64` bounds.
    pub fn process(&mut self, record: &RawRecord) {
        self.total_rows += 1;

        let status = record.status();

        let coerced = coerce_amount(record.amount_cents.as_deref());
        if coerced.was_invalid {
            self.invalid_amount_count += 1;
            debug!(
                "Row {}: non-numeric amount {:?} treated as 0",
                self.total_rows,
                record.amount_cents.as_deref().unwrap_or_default()
            );
        }
        let amount = coerced.value;

        self.sum_all_amount = self.sum_all_amount.saturating_add(amount);

        match status {
            Status::Completed => {
                self.completed_count += 1;
                self.sum_completed_amount = self.sum_completed_amount.saturating_add(amount);
            }
            Status::Failed => {
                self.failed_count += 1;
            }
            Status::Other => {}
        }
    }

    /// Records observed so far
    pub fn rows_read(&self) -> u64 {
        self.total_rows
    }

    /// Records whose amount failed coercion so far
    pub fn invalid_amounts(&self) -> u64 {
        self.invalid_amount_count
    }

    /// Sum of amounts over every record regardless of status
    pub fn sum_all_amount(&self) -> Amount {
        self.sum_all_amount
    }

    /// Summary statistics for the records seen so far
    ///
    /// `avg_amount` is the full-precision mean of all amounts, or exactly
    /// `0.0` when no rows were seen.
    pub fn finalize(&self) -> Summary {
        let avg_amount = if self.total_rows > 0 {
            self.sum_all_amount as f64 / self.total_rows as f64
        } else {
            0.0
        };

        Summary {
            total_rows: self.total_rows,
            completed: self.completed_count,
            failed: self.failed_count,
            sum_completed_amount: self.sum_completed_amount,
            avg_amount,
        }
    }
}
