//! JSON encoding of the full report tree
//!
//! Object keys are emitted in sorted order so the encoding is stable across
//! field reordering in the Rust types. Floats use the same text as the fixed
//! layout, so `1e-05` reads the same in both outputs.

use crate::format::text::format_float;
use crate::format::ReportFormatter;
use crate::types::{ReportError, Result, StructuredReport};
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use std::io::{self, Write};

/// Machine-readable JSON formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a formatter; `pretty` selects two-space indentation
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportFormatter for JsonFormatter {
    fn write(&self, report: &StructuredReport, output: &mut dyn Write) -> Result<()> {
        let encoded = render_json(report, self.pretty)?;
        writeln!(output, "{}", encoded)?;
        output.flush()?;
        Ok(())
    }
}

/// Encode the report as JSON with sorted keys
pub fn render_json(report: &StructuredReport, pretty: bool) -> Result<String> {
    // serde_json::Map is ordered by key
    let tree = serde_json::to_value(report)?;

    let mut encoded = Vec::new();
    if pretty {
        let formatter = FloatText(PrettyFormatter::new());
        tree.serialize(&mut Serializer::with_formatter(&mut encoded, formatter))?;
    } else {
        let formatter = FloatText(CompactFormatter);
        tree.serialize(&mut Serializer::with_formatter(&mut encoded, formatter))?;
    }

    String::from_utf8(encoded).map_err(|e| ReportError::Output {
        message: e.to_string(),
    })
}

/// Wraps a serde_json formatter, writing `f64` values with [`format_float`]
struct FloatText<F>(F);

impl<F: Formatter> Formatter for FloatText<F> {
    fn write_f64<W: ?Sized + Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(format_float(value).as_bytes())
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}
