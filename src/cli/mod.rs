// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, OutputFormat};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Unlike `CliArgs::parse`, this hands usage errors (and `--help` output)
/// back to the caller so the binary controls the exit code.
pub fn try_parse_args() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
