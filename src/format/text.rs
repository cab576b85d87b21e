//! Fixed text layout
//!
//! Renders the five summary fields, one indented line each, under a
//! `Transaction report:` heading. Observability counters are not shown.

use crate::format::ReportFormatter;
use crate::types::{Result, StructuredReport, Summary};
use std::io::Write;

/// Human-readable text formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write(&self, report: &StructuredReport, output: &mut dyn Write) -> Result<()> {
        output.write_all(render_text(&report.summary).as_bytes())?;
        output.flush()?;
        Ok(())
    }
}

/// Render the summary as the fixed text layout, newline-terminated
pub fn render_text(summary: &Summary) -> String {
    format!(
        "Transaction report:\n  \
         total_rows: {}\n  \
         completed: {}\n  \
         failed: {}\n  \
         sum_completed_amount: {}\n  \
         avg_amount: {}\n",
        summary.total_rows,
        summary.completed,
        summary.failed,
        summary.sum_completed_amount,
        format_float(summary.avg_amount)
    )
}

/// Format a float the way the report has always shown it
///
/// Digits are the shortest that round-trip. Decimal exponents from -4 to 15
/// print positionally, with integral values keeping one decimal place
/// (`600.0`); anything outside that range switches to exponent form with a
/// signed, at least two-digit exponent (`1e-05`, `1e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let positional = format!("{}", value);
    if positional.contains('.') {
        positional
    } else {
        format!("{}.0", positional)
    }
}
