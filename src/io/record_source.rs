//! Streaming record source with iterator interface
//!
//! Provides a lazy iterator over [`RawRecord`]s read from a delimited file.
//! The first row is the header; its column names key every later row.
//!
//! # Design
//!
//! The RecordSource wraps a `csv::Reader` and deserializes one row per
//! `next()` call, so memory use is bounded by a single record regardless of
//! file size. Field values are passed through untouched; only header names are
//! trimmed so that `" status"` still matches the recognised column.
//!
//! ```no_run
//! use transaction_reporter::io::RecordSource;
//! use std::path::Path;
//!
//! let source = RecordSource::open(Path::new("transactions.csv")).unwrap();
//! for result in source {
//!     match result {
//!         Ok(record) => println!("status: {:?}", record.status),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Opening fails with `NotFound` when the path cannot be opened or read
//! - Opening fails with `EmptyInput` when there is no header row
//! - Decoding failures mid-stream are yielded as `Err` items
//!
//! The underlying file handle is released when the source is dropped,
//! whether or not it was exhausted.

use crate::types::{RawRecord, ReportError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reader configuration for the record source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Size of the read buffer in bytes
    pub buffer_capacity: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            buffer_capacity: 8 * 1024,
        }
    }
}

impl SourceConfig {
    /// Create a new SourceConfig with custom values
    ///
    /// Invalid values fall back to the defaults with a warning: the delimiter
    /// must be an ASCII character other than a quote or line break, and the
    /// buffer capacity must be non-zero.
    pub fn new(delimiter: u8, buffer_capacity: usize) -> Self {
        let default = Self::default();

        let delimiter = if delimiter.is_ascii() && !matches!(delimiter, b'"' | b'\n' | b'\r') {
            delimiter
        } else {
            warn!(
                "Invalid delimiter ({:?}), using default ({:?})",
                delimiter as char, default.delimiter as char
            );
            default.delimiter
        };

        let buffer_capacity = if buffer_capacity == 0 {
            warn!(
                "Invalid buffer_capacity ({}), using default ({})",
                buffer_capacity, default.buffer_capacity
            );
            default.buffer_capacity
        } else {
            buffer_capacity
        };

        Self {
            delimiter,
            buffer_capacity,
        }
    }
}

/// Lazy, finite sequence of raw records
///
/// Not restartable: reopen the path to read the records again.
#[derive(Debug)]
pub struct RecordSource<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
}

impl RecordSource<File> {
    /// Open a file with the default configuration
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_config(path, &SourceConfig::default())
    }

    /// Open a file and read its header row
    ///
    /// # Errors
    ///
    /// * `ReportError::NotFound` if the file cannot be opened or read
    /// * `ReportError::EmptyInput` if the file has no header row
    pub fn open_with_config(path: &Path, config: &SourceConfig) -> Result<Self> {
        let label = path.display().to_string();
        let file = File::open(path).map_err(|e| ReportError::not_found(&label, &e.to_string()))?;

        Self::with_label(file, config, &label)
    }
}

impl<R: Read> RecordSource<R> {
    /// Wrap any reader, reading its header row immediately
    pub fn from_reader(input: R, config: &SourceConfig) -> Result<Self> {
        Self::with_label(input, config, "<reader>")
    }

    fn with_label(input: R, config: &SourceConfig, label: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .trim(Trim::Headers)
            .flexible(true)
            .buffer_capacity(config.buffer_capacity)
            .from_reader(input);

        // An unreadable input (e.g. a directory path) fails at the header read
        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(e) if e.is_io_error() => {
                return Err(ReportError::not_found(label, &e.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        if headers.is_empty() {
            return Err(ReportError::empty_input(label));
        }
        debug!("Opened {} with columns {:?}", label, headers);

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl<R: Read> Iterator for RecordSource<R> {
    type Item = Result<RawRecord>;

    /// Read and deserialize the next row
    ///
    /// Unknown columns are ignored; missing or empty recognised columns
    /// come through as `None`.
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(
                self.record
                    .deserialize::<RawRecord>(Some(&self.headers))
                    .map_err(ReportError::from),
            ),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
