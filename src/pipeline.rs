//! Report pipeline
//!
//! Drives one complete pass: `Idle -> Opened -> Streaming -> Finalized`.
//!
//! - **Opened**: [`Pipeline::open`] acquires the file and reads the header.
//!   This is the only step that can fail with `NotFound` or `EmptyInput`.
//! - **Streaming**: [`Pipeline::run`] folds every record into an
//!   [`Accumulator`] in file order. Malformed amounts are absorbed; only a
//!   mid-stream I/O or decoding failure aborts the pass.
//! - **Finalized**: the accumulator is consumed into a [`StructuredReport`].
//!
//! Timing covers everything from opening the input to assembling the report.

use crate::core::{assemble_report, Accumulator};
use crate::io::{RecordSource, SourceConfig};
use crate::types::{Observability, Result, StructuredReport, Summary};
use log::{info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// An opened pass, ready to stream
///
/// # Examples
///
/// ```no_run
/// use transaction_reporter::io::SourceConfig;
/// use transaction_reporter::pipeline::Pipeline;
/// use std::path::Path;
///
/// let pipeline = Pipeline::open(Path::new("transactions.csv"), &SourceConfig::default())
///     .expect("Failed to open input");
/// let report = pipeline.run().expect("Processing failed");
/// println!("{} rows", report.summary.total_rows);
/// ```
#[derive(Debug)]
pub struct Pipeline<R> {
    source: RecordSource<R>,
    started: Instant,
}

impl Pipeline<File> {
    /// Open the input file and read its header row
    pub fn open(path: &Path, config: &SourceConfig) -> Result<Self> {
        let started = Instant::now();
        let source = RecordSource::open_with_config(path, config)?;
        Ok(Self { source, started })
    }
}

impl<R: Read> Pipeline<R> {
    /// Open a pass over an arbitrary reader
    pub fn from_reader(input: R, config: &SourceConfig) -> Result<Self> {
        let started = Instant::now();
        let source = RecordSource::from_reader(input, config)?;
        Ok(Self { source, started })
    }

    /// Stream every record through the accumulator and assemble the report
    ///
    /// Either the complete report or an error is returned, never a partial
    /// report. The input is released on both paths.
    pub fn run(self) -> Result<StructuredReport> {
        let mut accumulator = Accumulator::new();

        for record in self.source {
            accumulator.process(&record?);
        }

        let report = assemble_report(accumulator, self.started.elapsed());

        info!("{}", completion_message(&report.observability));
        if report.observability.invalid_amounts > 0 {
            warn!(
                "{} row(s) had a non-numeric amount and were counted as 0",
                report.observability.invalid_amounts
            );
        }

        Ok(report)
    }
}

fn completion_message(observability: &Observability) -> String {
    format!(
        "Processed {} rows ({} invalid amounts) in {:.6}s",
        observability.rows_read, observability.invalid_amounts, observability.duration_seconds
    )
}

/// Compute the full structured report for a file
pub fn compute(path: &Path) -> Result<StructuredReport> {
    compute_with_config(path, &SourceConfig::default())
}

/// Compute the full structured report for a file with a custom reader setup
pub fn compute_with_config(path: &Path, config: &SourceConfig) -> Result<StructuredReport> {
    Pipeline::open(path, config)?.run()
}

/// Compute only the flat summary for a file
pub fn generate_report(path: &Path) -> Result<Summary> {
    compute(path).map(StructuredReport::into_summary)
}
