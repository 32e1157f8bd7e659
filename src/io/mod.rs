//! I/O module
//!
//! Handles CSV parsing and document loading.
//!
//! # Components
//!
//! - `csv_format` - positional CSV format handling (row conversion, pure)
//! - `loader` - sequential single-pass loader building the document sequence

pub mod csv_format;
pub mod loader;

pub use csv_format::{convert_item_record, convert_price_record, parse_mid};
pub use loader::load_documents;
