//! Transaction Reporter Library
//! # Overview
//!
//! This library streams a delimited transaction file once and produces summary
//! statistics together with observability counters about the pass.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (RawRecord, Status, StructuredReport, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - Streaming record source over the input file
//! - [`core`] - Aggregation components:
//!   - [`core::coercion`] - Raw amount text to minor units, never failing
//!   - [`core::accumulator`] - Single-pass running totals
//!   - [`core::assembler`] - Final report assembly
//! - [`pipeline`] - Drives one pass from open to finalized report
//! - [`format`] - Text and JSON renderers
//!
//! # Report Shape
//!
//! - `summary`: `total_rows`, `completed`, `failed`, `sum_completed_amount`, `avg_amount`
//! - `observability`: `rows_read`, `invalid_amounts`, `duration_seconds`
//!
//! Rows with a non-numeric `amount_cents` count as zero and are tallied in
//! `invalid_amounts`; they never abort the report.

// Module declarations
pub mod cli;
pub mod core;
pub mod format;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{coerce_amount, Accumulator, CoercedAmount};
pub use io::{RecordSource, SourceConfig};
pub use pipeline::{compute, compute_with_config, generate_report, Pipeline};
pub use types::{
    Amount, Observability, RawRecord, ReportError, Status, StructuredReport, Summary,
};
