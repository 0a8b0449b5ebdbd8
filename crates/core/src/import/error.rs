//! Structural errors for the CSV import pipeline.
//!
//! These are whole-file failures: nothing in the upload can be processed.
//! Per-row validation failures are not errors at this level - they ride in
//! [`super::types::RowError`] alongside the rows that did import.

use thiserror::Error;

/// Whole-file CSV import failures.
#[derive(Debug, Error)]
pub enum CsvImportError {
    /// The file could not be parsed as CSV.
    #[error("malformed CSV: {0}")]
    Malformed(String),

    /// The file contains a header row but no data rows.
    #[error("no data rows")]
    Empty,
}
