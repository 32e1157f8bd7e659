//! End-to-end export pipeline
//!
//! Wires the stages together: load the CSV into the document sequence,
//! partition it across workers, dispatch the parallel upload, and log the
//! merged summary. This is the single entry point `main` calls.

use crate::cli::SchemaType;
use crate::core::dispatcher::{UploadDispatcher, UploadSummary};
use crate::core::sink::{DocumentSink, HttpSink};
use crate::io::loader::load_documents;
use crate::types::ExportError;
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

/// Validated configuration for one export run
///
/// Built from CLI arguments by `CliArgs::to_export_config`; every field is
/// resolved (no optional endpoint, positive worker count) by the time the
/// pipeline sees it.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Path to the input CSV file
    pub csv_file: PathBuf,

    /// Optional strict row-count expectation
    pub item_count: Option<usize>,

    /// Positional field layout of the input file
    pub schema: SchemaType,

    /// Endpoint every document is posted to
    pub post_url: Url,

    /// Number of parallel upload workers
    pub workers: usize,

    /// Agent tag stamped into every document
    pub agent: String,
}

/// Run a full export: load, partition, upload, summarize
///
/// Per-record upload failures do not fail the run; they are logged by the
/// workers and counted in the returned summary. Only load-stage and
/// runtime-construction errors are fatal.
///
/// # Errors
///
/// Returns an error if the input file cannot be opened or parsed, the row
/// count disagrees with the configured expectation, or the async runtime
/// cannot be built.
pub fn run_export(config: &ExportConfig) -> Result<UploadSummary, ExportError> {
    let sink = HttpSink::new(config.post_url.clone());
    run_export_with_sink(config, sink)
}

/// Run a full export through a caller-supplied sink
///
/// This is the seam the tests drive: identical pipeline, no network.
pub fn run_export_with_sink<S>(config: &ExportConfig, sink: S) -> Result<UploadSummary, ExportError>
where
    S: DocumentSink + Clone + 'static,
{
    let documents = load_documents(
        &config.csv_file,
        config.schema,
        &config.agent,
        config.item_count,
    )?;

    let dispatcher = UploadDispatcher::new(sink, config.workers);
    let summary = dispatcher.dispatch(documents)?;

    if summary.failed > 0 || summary.skipped > 0 {
        warn!(
            attempted = summary.attempted,
            succeeded = summary.succeeded,
            failed = summary.failed,
            skipped = summary.skipped,
            "export finished with unsent documents"
        );
    } else {
        info!(
            attempted = summary.attempted,
            succeeded = summary.succeeded,
            "export finished"
        );
    }

    Ok(summary)
}
