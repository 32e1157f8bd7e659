//! Core upload logic module
//!
//! This module contains the components of the parallel upload stage:
//! - `partition` - contiguous index-range partitioning across workers
//! - `sink` - the document delivery seam and its HTTP implementation
//! - `uploader` - the per-partition upload worker
//! - `dispatcher` - worker fan-out and report merging
//! - `pipeline` - the end-to-end load/partition/upload entry point

pub mod dispatcher;
pub mod partition;
pub mod pipeline;
pub mod sink;
pub mod uploader;

pub use dispatcher::{UploadDispatcher, UploadSummary};
pub use partition::{partition_sequence, Partition, PartitionPlan};
pub use pipeline::{run_export, run_export_with_sink, ExportConfig};
pub use sink::{DocumentSink, HttpSink};
pub use uploader::{UploadFailure, UploadReport, UploadWorker};
