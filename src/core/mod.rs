//! Core aggregation module
//!
//! This module contains the streaming aggregation components:
//! - `coercion` - Total conversion of raw amount text to minor units
//! - `accumulator` - Single-pass running totals
//! - `assembler` - Final structured report assembly

pub mod accumulator;
pub mod assembler;
pub mod coercion;

pub use accumulator::Accumulator;
pub use assembler::assemble_report;
pub use coercion::{coerce_amount, CoercedAmount};
