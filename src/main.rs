//! Item Exporter CLI
//!
//! Command-line interface for bulk-uploading item documents from a CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --csvfile items2.csv --itemcount 1000000
//! cargo run -- -c items.csv --schema item --workers 30
//! cargo run -- -c prices.csv --schema price --url http://localhost:8080/prices
//! ```
//!
//! The program reads item rows from the input CSV file, transforms each row
//! into a JSON document, and posts the documents to the configured endpoint
//! using parallel upload workers. Per-record failures are logged and counted
//! but never abort the run.
//!
//! # Exit Codes
//!
//! - 0: Run completed (including runs with per-record upload failures) or
//!   `--help` was requested
//! - 1: Fatal error (file not found, malformed row, row-count mismatch, etc.)
//! - 2: CLI flag parse error

use item_exporter::cli;
use item_exporter::core::pipeline;
use std::process;

fn main() {
    // Structured log output; level controlled via RUST_LOG, info by default
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Resolve arguments into a validated run configuration
    let config = match args.to_export_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Run the export pipeline; per-record failures are reported in the
    // summary and do not affect the exit code
    if let Err(e) = pipeline::run_export(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
