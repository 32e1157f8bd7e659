//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `document`: transformed item documents and their nested shapes
//! - `error`: error types for the exporter

pub mod document;
pub mod error;

pub use document::{DocumentMeta, ItemDocument, ItemEntry};
pub use error::ExportError;
