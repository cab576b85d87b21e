//! I/O module
//!
//! Handles reading the delimited input file.
//!
//! # Components
//!
//! - `record_source` - Streaming record reader with iterator interface

pub mod record_source;

pub use record_source::{RecordSource, SourceConfig};
