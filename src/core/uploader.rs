//! Per-partition upload worker
//!
//! Each worker owns one contiguous partition of the shared document sequence
//! and sends its documents through the sink one at a time, in strictly
//! increasing index order. Delivery is best-effort: a failed send is logged,
//! recorded in the worker's report, and skipped — never retried.

use crate::core::partition::Partition;
use crate::core::sink::DocumentSink;
use crate::types::ItemDocument;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Progress events are emitted every this many sends
const PROGRESS_INTERVAL: usize = 1000;

/// One document that failed to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    /// Index of the document in the shared sequence
    pub index: usize,

    /// The document's item id
    pub id: String,

    /// Description of the send failure
    pub message: String,
}

/// Result of one worker's pass over its partition
///
/// Failures are captured rather than swallowed so the dispatcher can merge
/// them into an end-of-run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    /// Worker number this report belongs to
    pub worker: usize,

    /// Number of documents the worker tried to send
    pub attempted: usize,

    /// Number of documents that were sent without error
    pub succeeded: usize,

    /// The sends that failed, in index order
    pub failures: Vec<UploadFailure>,
}

impl UploadReport {
    fn new(worker: usize) -> Self {
        Self {
            worker,
            attempted: 0,
            succeeded: 0,
            failures: Vec::new(),
        }
    }
}

/// Upload worker bound to one partition of the shared document sequence
///
/// The worker consumes itself on `run`, which makes it straightforward to
/// move into a spawned task.
#[derive(Debug)]
pub struct UploadWorker<S> {
    partition: Partition,
    documents: Arc<Vec<ItemDocument>>,
    sink: S,
}

impl<S: DocumentSink> UploadWorker<S> {
    /// Create a worker for the given partition
    ///
    /// The partition must lie within the bounds of `documents`; partitions
    /// produced by `partition_sequence` over the same sequence always do.
    pub fn new(partition: Partition, documents: Arc<Vec<ItemDocument>>, sink: S) -> Self {
        Self {
            partition,
            documents,
            sink,
        }
    }

    /// Send every document in the partition, in index order
    ///
    /// Iterates the half-open range `[start, start + len)`. A send error is
    /// logged together with the failing document, recorded in the report,
    /// and the loop continues with the next index.
    pub async fn run(self) -> UploadReport {
        let mut report = UploadReport::new(self.partition.worker);

        for index in self.partition.start..self.partition.end() {
            let document = &self.documents[index];
            report.attempted += 1;

            match self.sink.send(document).await {
                Ok(()) => report.succeeded += 1,
                Err(error) => {
                    warn!(
                        worker = self.partition.worker,
                        index,
                        id = %document.id,
                        document = ?document,
                        %error,
                        "failed to send document"
                    );
                    report.failures.push(UploadFailure {
                        index,
                        id: document.id.clone(),
                        message: error.to_string(),
                    });
                }
            }

            if report.attempted % PROGRESS_INTERVAL == 0 {
                debug!(
                    worker = self.partition.worker,
                    sent = report.attempted,
                    total = self.partition.len,
                    "upload progress"
                );
            }
        }

        info!(
            worker = self.partition.worker,
            attempted = report.attempted,
            succeeded = report.succeeded,
            failed = report.failures.len(),
            "worker finished"
        );

        report
    }
}
