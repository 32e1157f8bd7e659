//! Sequential CSV loader
//!
//! Reads the entire input file in one pass, converting each row into a
//! transformed document at the row's index. The resulting sequence is the
//! read-only input to the upload stage; index order equals file row order.
//!
//! # Error Handling
//!
//! Loading is all-or-nothing: a file that cannot be opened, a malformed row,
//! or a row count that disagrees with the caller's expectation all abort the
//! load before any upload is attempted. There is no partial result.
//!
//! # Expected-count semantics
//!
//! The optional expected count serves two purposes: it pre-allocates the
//! document sequence, and it is asserted against the actual row count after
//! the pass. A mismatch in either direction is fatal, so a short or oversized
//! file can never flow unset or unexpected rows into the upload stage.

use crate::cli::SchemaType;
use crate::io::csv_format::{convert_item_record, convert_price_record};
use crate::types::{ExportError, ItemDocument};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Load and transform every row of a headerless CSV file
///
/// # Arguments
///
/// * `path` - Path to the input CSV file
/// * `schema` - Which positional field layout the file uses
/// * `agent` - Agent tag stamped into every document
/// * `expected_count` - Optional strict row-count expectation
///
/// # Returns
///
/// * `Ok(Vec<ItemDocument>)` - every row converted, in file order
/// * `Err(ExportError)` - the file could not be opened, a row was malformed,
///   or the actual row count disagreed with `expected_count`
pub fn load_documents(
    path: &Path,
    schema: SchemaType,
    agent: &str,
    expected_count: Option<usize>,
) -> Result<Vec<ItemDocument>, ExportError> {
    let file = File::open(path)
        .map_err(|e| ExportError::file_open(&path.display().to_string(), &e.to_string()))?;

    // Headerless, positional input. Flexible parsing tolerates rows with
    // extra trailing fields; short rows are rejected during conversion.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .buffer_capacity(8 * 1024)
        .from_reader(file);

    let mut documents = Vec::with_capacity(expected_count.unwrap_or(0));

    for (row_index, result) in reader.records().enumerate() {
        let record = result?;
        let line = Some(row_index as u64 + 1);

        let document = match schema {
            SchemaType::Item => convert_item_record(&record, agent),
            SchemaType::Price => convert_price_record(&record, agent),
        }
        .map_err(|message| ExportError::parse(line, &message))?;

        documents.push(document);
    }

    if let Some(expected) = expected_count {
        if documents.len() != expected {
            return Err(ExportError::row_count_mismatch(expected, documents.len()));
        }
    }

    info!(
        file = %path.display(),
        expected = expected_count,
        actual = documents.len(),
        "loaded input file"
    );

    Ok(documents)
}
