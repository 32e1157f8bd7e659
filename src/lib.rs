//! Item Exporter Library
//! # Overview
//!
//! This library provides a CSV-to-HTTP bulk uploader: it reads a headerless
//! CSV file of item rows, transforms each row into a JSON document, and
//! delivers the documents to a remote endpoint over parallel workers.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (ItemDocument, ExportError)
//! - [`cli`] - CLI argument parsing
//! - [`io`] - CSV format handling and the sequential loader
//! - [`core`] - Upload logic:
//!   - [`core::partition`] - contiguous index-range partitioning
//!   - [`core::sink`] - the document delivery seam (HTTP in production)
//!   - [`core::uploader`] - per-partition upload workers
//!   - [`core::dispatcher`] - worker fan-out and report merging
//!   - [`core::pipeline`] - the end-to-end entry point
//!
//! # Delivery Model
//!
//! Delivery is best-effort bulk upload:
//!
//! - The full document sequence is built in memory once, then shared
//!   read-only with every worker.
//! - Each worker owns a disjoint, contiguous index range and sends its
//!   documents sequentially in increasing index order.
//! - A failed send is logged and recorded, never retried; it does not stop
//!   the worker or the run.
//! - The sequence tail that falls outside every worker's equal-sized chunk
//!   is intentionally not uploaded and is reported as skipped.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{
    run_export, run_export_with_sink, DocumentSink, ExportConfig, HttpSink, UploadDispatcher,
    UploadFailure, UploadReport, UploadSummary,
};
pub use io::load_documents;
pub use types::{DocumentMeta, ExportError, ItemDocument, ItemEntry};
