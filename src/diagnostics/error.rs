//! Load-time error taxonomy
//!
//! Every variant is fatal: the loader never returns a partial table.

use std::io;
use thiserror::Error;

/// Errors raised while building a [`DiagnosticTable`](super::DiagnosticTable)
/// from a log source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("cannot read diagnostic log '{name}': {source}")]
    SourceNotFound {
        name: String,
        #[source]
        source: io::Error,
    },

    /// A required column is absent from the header.
    #[error("missing required column '{column}' in header")]
    MissingColumn { column: String },

    /// The header names the same column more than once.
    #[error("column '{column}' appears more than once in header")]
    DuplicateColumn { column: String },

    /// A data row could not be interpreted. `row` is 1-based, header excluded;
    /// 0 denotes the header itself.
    #[error("malformed row {row}: {defect}")]
    MalformedRow { row: usize, defect: RowDefect },

    /// The header is present but no data rows follow.
    #[error("diagnostic log has no data rows")]
    EmptyTable,

    /// A required metric is NaN or infinite, i.e. the simulation diverged.
    #[error("non-finite {column} = {value} at row {row}")]
    NonFiniteValue {
        row: usize,
        column: String,
        value: f64,
    },
}

impl LoadError {
    /// Data row the error refers to, when there is one.
    pub fn row(&self) -> Option<usize> {
        match self {
            LoadError::MalformedRow { row, .. } | LoadError::NonFiniteValue { row, .. } => {
                Some(*row)
            }
            _ => None,
        }
    }
}

/// What exactly is wrong with a malformed row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowDefect {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("step '{field}' is not a non-negative integer")]
    InvalidStep { field: String },

    #[error("value '{field}' in column '{column}' is not a number")]
    InvalidNumber { column: String, field: String },

    #[error("step {found} does not follow step {previous}")]
    StepOrder { previous: u64, found: u64 },

    #[error("row is not valid UTF-8")]
    Encoding,
}
