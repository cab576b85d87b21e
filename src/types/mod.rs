//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Per-row record, status and amount types
//! - `report`: Summary, observability and structured report types
//! - `error`: Error types for the reporter

pub mod error;
pub mod record;
pub mod report;

pub use error::{ReportError, Result};
pub use record::{Amount, RawRecord, Status};
pub use report::{Observability, StructuredReport, Summary};
