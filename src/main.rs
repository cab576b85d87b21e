//! Transaction Reporter CLI
//!
//! Command-line interface for summarising a transaction CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv
//! cargo run -- --format json transactions.csv
//! cargo run -- --format json --pretty --verbose transactions.csv
//! cargo run -- --delimiter ';' transactions.csv
//! ```
//!
//! The program streams the input once, then prints either the fixed text
//! layout or the full JSON report to stdout.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: overrides the log filter (default `warn`, `debug` with `--verbose`)
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Usage error (missing or invalid arguments)
//! - 2: File problem (not found, unreadable, no header row)
//! - 3: Processing problem (read or decode failure, output failure)

use std::io;
use std::process;
use transaction_reporter::cli::{self, CliArgs};
use transaction_reporter::format;
use transaction_reporter::pipeline;

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_FILE_PROBLEM: i32 = 2;
const EXIT_PROCESSING_PROBLEM: i32 = 3;

fn main() {
    let args = match cli::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let _ = e.print();
            process::exit(if e.use_stderr() {
                EXIT_USAGE
            } else {
                EXIT_SUCCESS
            });
        }
    };

    init_logging(args.verbose);

    process::exit(run(&args));
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &CliArgs) -> i32 {
    let config = args.to_source_config();

    let report = match pipeline::compute_with_config(&args.input_file, &config) {
        Ok(report) => report,
        Err(e) if e.is_file_problem() => {
            eprintln!("Error: {}", e);
            return EXIT_FILE_PROBLEM;
        }
        Err(e) => {
            eprintln!(
                "Error while processing {}: {}",
                args.input_file.display(),
                e
            );
            return EXIT_PROCESSING_PROBLEM;
        }
    };

    if args.verbose {
        eprintln!(
            "# diagnostics: rows_read={} invalid_amounts={} duration_s={:.6}",
            report.observability.rows_read,
            report.observability.invalid_amounts,
            report.observability.duration_seconds
        );
    }

    let formatter = format::create_formatter(args.format, args.pretty);
    let mut output = io::stdout().lock();
    if let Err(e) = formatter.write(&report, &mut output) {
        eprintln!("Error writing report: {}", e);
        return EXIT_PROCESSING_PROBLEM;
    }

    EXIT_SUCCESS
}
