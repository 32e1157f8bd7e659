// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, SchemaType, DEFAULT_AGENT, DEFAULT_CSV_FILE, DEFAULT_WORKERS};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, unknown flags) clap displays an
/// error message and exits the process with code 2; `--help` prints usage
/// and exits 0.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
