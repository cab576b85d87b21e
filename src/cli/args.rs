use crate::io::SourceConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Summarise a transaction CSV file
#[derive(Parser, Debug)]
#[command(name = "transaction-reporter")]
#[command(about = "Generate a small transaction summary report", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing transaction records
    #[arg(value_name = "INPUT", help = "Path to the transactions CSV")]
    pub input_file: PathBuf,

    /// Output format for the report
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Output format: 'text' for the fixed layout or 'json' for the full report"
    )]
    pub format: OutputFormat,

    /// Indent JSON output
    #[arg(long = "pretty", help = "Indent JSON output (ignored for text)")]
    pub pretty: bool,

    /// Field delimiter of the input file
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = ',',
        help = "Field delimiter (single ASCII character)"
    )]
    pub delimiter: char,

    /// Print diagnostics to stderr
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Print extra diagnostics to stderr"
    )]
    pub verbose: bool,
}

/// Available output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliArgs {
    /// Create a SourceConfig from CLI arguments
    ///
    /// Delimiters that do not fit in one byte are passed through as an
    /// invalid byte so that `SourceConfig::new` falls back to the default.
    pub fn to_source_config(&self) -> SourceConfig {
        let default = SourceConfig::default();
        let delimiter = u8::try_from(self.delimiter).unwrap_or(u8::MAX);
        SourceConfig::new(delimiter, default.buffer_capacity)
    }
}
