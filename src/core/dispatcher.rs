//! Parallel upload dispatcher
//!
//! Fans the loaded document sequence out over N upload workers and merges
//! their reports into a single end-of-run summary. Workers run as tasks on a
//! multi-threaded tokio runtime; the sequence is shared read-only via `Arc`,
//! and each worker owns a disjoint index range, so no synchronization
//! primitive is needed between them.
//!
//! There is no cancellation path: once dispatched, a run completes when every
//! worker has walked its partition. Per-record failures never abort a worker.

use crate::core::partition::partition_sequence;
use crate::core::sink::DocumentSink;
use crate::core::uploader::{UploadFailure, UploadReport, UploadWorker};
use crate::types::{ExportError, ItemDocument};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info};

/// Merged result of an upload run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadSummary {
    /// Documents the workers tried to send
    pub attempted: usize,

    /// Documents sent without error
    pub succeeded: usize,

    /// Documents whose send failed (equals `failures.len()`)
    pub failed: usize,

    /// Trailing documents excluded by partitioning, never attempted
    pub skipped: usize,

    /// Every per-record failure, ordered by worker then index
    pub failures: Vec<UploadFailure>,
}

impl UploadSummary {
    fn merge(reports: Vec<UploadReport>, skipped: usize) -> Self {
        let mut summary = UploadSummary {
            skipped,
            ..Default::default()
        };

        for report in reports {
            summary.attempted += report.attempted;
            summary.succeeded += report.succeeded;
            summary.failed += report.failures.len();
            summary.failures.extend(report.failures);
        }

        summary
    }
}

/// Dispatcher that runs one upload worker per partition
///
/// Generic over the sink so tests can inject recording or fault-injecting
/// implementations; production uses `HttpSink`.
#[derive(Debug, Clone)]
pub struct UploadDispatcher<S> {
    sink: S,
    workers: usize,
}

impl<S> UploadDispatcher<S>
where
    S: DocumentSink + Clone + 'static,
{
    /// Create a dispatcher with the given sink and worker count
    ///
    /// The worker count must be positive; the configuration layer resolves
    /// zero to the CPU count before it gets here.
    pub fn new(sink: S, workers: usize) -> Self {
        Self { sink, workers }
    }

    /// Upload the full document sequence and return the merged summary
    ///
    /// Builds a multi-threaded runtime sized to the worker count, spawns one
    /// task per partition, and blocks until every task has finished.
    ///
    /// # Errors
    ///
    /// Returns an error only if the runtime cannot be constructed. Per-record
    /// upload failures are reported in the summary, not as an error.
    pub fn dispatch(&self, documents: Vec<ItemDocument>) -> Result<UploadSummary, ExportError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.workers)
            .enable_all()
            .build()
            .map_err(|e| ExportError::runtime(&e.to_string()))?;

        let documents = Arc::new(documents);
        Ok(runtime.block_on(self.dispatch_shared(documents)))
    }

    /// Upload an already-shared document sequence on the current runtime
    pub async fn dispatch_shared(&self, documents: Arc<Vec<ItemDocument>>) -> UploadSummary {
        let plan = partition_sequence(documents.len(), self.workers);

        info!(
            documents = documents.len(),
            workers = plan.partitions.len(),
            chunk_size = plan.chunk_size,
            truncated = plan.truncated,
            "dispatching upload"
        );

        let tasks: Vec<_> = plan
            .partitions
            .iter()
            .map(|&partition| {
                let worker =
                    UploadWorker::new(partition, Arc::clone(&documents), self.sink.clone());
                tokio::spawn(worker.run())
            })
            .collect();

        let mut reports = Vec::with_capacity(tasks.len());
        for result in join_all(tasks).await {
            match result {
                Ok(report) => reports.push(report),
                Err(e) => error!("upload task panicked: {:?}", e),
            }
        }

        UploadSummary::merge(reports, plan.truncated)
    }
}
