//! Output format module for rendering reports
//!
//! This module defines the formatter abstraction used to render a
//! [`StructuredReport`]. The concrete formatter (fixed text layout or JSON) is
//! selected at runtime from the command line.

use crate::cli::OutputFormat;
use crate::types::{Result, StructuredReport};
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Report formatter trait
///
/// Each formatter renders the whole report to the given writer. Formatters
/// own no state beyond their options, so the same formatter can render any
/// number of reports.
pub trait ReportFormatter: Send + Sync {
    /// Render `report` to `output`
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Output` if serialisation fails, or
    /// `ReportError::Io` if the writer fails.
    fn write(&self, report: &StructuredReport, output: &mut dyn Write) -> Result<()>;
}

/// Create a formatter for the requested output format
///
/// `pretty` only affects the JSON encoding.
pub fn create_formatter(format: OutputFormat, pretty: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(pretty)),
    }
}
