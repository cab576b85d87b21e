//! Report assembly
//!
//! Combines a drained [`Accumulator`] with the measured elapsed time into one
//! immutable [`StructuredReport`]. Assembly is pure and cannot fail.

use crate::core::accumulator::Accumulator;
use crate::types::{Observability, StructuredReport};
use std::time::Duration;

/// Build the final report, consuming the accumulator
pub fn assemble_report(accumulator: Accumulator, elapsed: Duration) -> StructuredReport {
    let summary = accumulator.finalize();

    StructuredReport {
        observability: Observability {
            rows_read: accumulator.rows_read(),
            invalid_amounts: accumulator.invalid_amounts(),
            duration_seconds: elapsed.as_secs_f64(),
        },
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawRecord;

    #[test]
    fn test_assemble_couples_summary_and_observability() {
        let mut accumulator = Accumulator::new();
        accumulator.process(&RawRecord::new(Some("completed"), Some("700")));
        accumulator.process(&RawRecord::new(Some("failed"), Some("bad")));

        let report = assemble_report(accumulator, Duration::from_millis(250));

        assert_eq!(report.summary.total_rows, 2);
        assert_eq!(report.summary.completed, 1);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.sum_completed_amount, 700);
        assert_eq!(report.summary.avg_amount, 350.0);
        assert_eq!(report.observability.rows_read, 2);
        assert_eq!(report.observability.invalid_amounts, 1);
        assert_eq!(report.observability.duration_seconds, 0.25);
    }

    #[test]
    fn test_assemble_empty_pass() {
        let report = assemble_report(Accumulator::new(), Duration::ZERO);
        assert_eq!(report.summary.avg_amount, 0.0);
        assert_eq!(report.observability.rows_read, 0);
        assert_eq!(report.observability.invalid_amounts, 0);
        assert_eq!(report.observability.duration_seconds, 0.0);
    }

    #[test]
    fn test_into_summary_projection() {
        let mut accumulator = Accumulator::new();
        accumulator.process(&RawRecord::new(Some("completed"), Some("10")));
        let report = assemble_report(accumulator, Duration::from_secs(1));
        let expected = report.summary.clone();

        assert_eq!(report.into_summary(), expected);
    }
}
