//! Benchmark suite for the report pipeline
//!
//! Measures a full pass (open, stream, aggregate, assemble) over generated
//! inputs of increasing size, using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Each input mixes completed, failed and other statuses, with one in every
//! hundred amounts non-numeric.

use std::io::Write;
use tempfile::NamedTempFile;
use transaction_reporter::pipeline::compute;

fn main() {
    divan::main();
}

/// Write a synthetic transactions file with `rows` data rows
fn generate_input(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "id,timestamp,amount_cents,currency,status").unwrap();
    for i in 0..rows {
        let status = match i % 4 {
            0 | 1 => "completed",
            2 => "failed",
            _ => "pending",
        };
        if i % 100 == 99 {
            writeln!(file, "{},2025-01-01T00:00:00Z,n/a,USD,{}", i, status).unwrap();
        } else {
            writeln!(file, "{},2025-01-01T00:00:00Z,{},USD,{}", i, (i % 5000) as i64 - 1000, status)
                .unwrap();
        }
    }
    file.flush().expect("Failed to flush temp file");
    file
}

/// Full pass over 100, 10,000 and 1,000,000 rows
#[divan::bench(args = [100, 10_000, 1_000_000], sample_count = 10)]
fn compute_report(bencher: divan::Bencher, rows: usize) {
    let input = generate_input(rows);

    bencher.bench(|| compute(input.path()).expect("Processing failed"));
}
