//! CSV diagnostic log reader
//!
//! Reads the per-step log a simulation writes, e.g.
//!
//! ```csv
//! Step,KineticEnergy,TotalMass
//! 0,10.000000,50.000000
//! 1,10.200000,50.000000
//! 2,9.900000,50.100000
//! ```
//!
//! # Features
//!
//! - **Header-driven**: columns are matched by name, in any order
//! - **Extra columns**: carried through as `f64`, not charted
//! - **Comments**: lines starting with `#` are skipped (metadata headers)
//! - **Dialects**: delimiter and trimming are configurable
//! - **Strict**: first defect aborts the load with its row number
//!
//! # Quick Example
//!
//! ```rust
//! use sim_diagnostics::input::{CsvLoader, Loader};
//!
//! let log = "Step,KineticEnergy,TotalMass\n0,10.0,50.0\n1,10.2,50.0\n";
//! let table = CsvLoader::default().load_reader(&mut log.as_bytes(), "inline")?;
//! assert_eq!(table.len(), 2);
//! # Ok::<(), sim_diagnostics::LoadError>(())
//! ```

use std::io::{self, Read};

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};

use super::Loader;
use crate::diagnostics::{DiagnosticTable, LoadError, RowDefect, TableBuilder};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration of the CSV dialect
///
/// # Fields
///
/// - `delimiter`: column separator (default: `b','`)
/// - `comment`: lines starting with this byte are skipped (default: `b'#'`)
/// - `trim`: strip whitespace around headers and fields (default: `true`)
///
/// # Example
///
/// ```rust
/// use sim_diagnostics::input::CsvLoadConfig;
///
/// let config = CsvLoadConfig::default().delimiter(b'\t').comment(None);
/// assert_eq!(config.delimiter, b'\t');
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CsvLoadConfig {
    /// Column delimiter (default: ',')
    pub delimiter: u8,

    /// Comment marker, `None` to disable (default: '#')
    pub comment: Option<u8>,

    /// Trim whitespace around every field (default: true)
    pub trim: bool,
}

impl Default for CsvLoadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: Some(b'#'),
            trim: true,
        }
    }
}

impl CsvLoadConfig {
    /// Semicolon-separated logs as written by European locale tools
    pub fn european() -> Self {
        Self {
            delimiter: b';',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set comment marker
    pub fn comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    /// Builder pattern: enable or disable trimming
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

// =============================================================================
// Loader
// =============================================================================

/// [`Loader`] for delimiter-separated logs
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    config: CsvLoadConfig,
}

impl CsvLoader {
    pub fn new(config: CsvLoadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CsvLoadConfig {
        &self.config
    }
}

impl Loader for CsvLoader {
    fn load_reader(&self, reader: &mut dyn Read, name: &str) -> Result<DiagnosticTable, LoadError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .comment(self.config.comment)
            .trim(if self.config.trim { Trim::All } else { Trim::None })
            // Field counts are checked per row so the error carries the row number
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let header = reader
            .headers()
            .map_err(|e| convert_error(e, name, 0))?
            .clone();
        let names: Vec<&str> = header.iter().collect();
        let mut builder = TableBuilder::new(names.as_slice())?;

        let mut record = StringRecord::new();
        loop {
            let row = builder.next_row_number();
            let more = reader
                .read_record(&mut record)
                .map_err(|e| convert_error(e, name, row))?;
            if !more {
                break;
            }

            let (step, values) = parse_record(&record, &builder, row)?;
            builder.push(step, values)?;
        }

        let table = builder.finish()?;

        let (first, last) = table.step_span();
        log::info!(
            "loaded {} diagnostic rows (steps {}..={}) from {}",
            table.len(),
            first,
            last,
            name
        );
        log::debug!("columns in {}: {:?}", name, table.columns());

        Ok(table)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Split one record into its step and metric values, in header order.
fn parse_record(
    record: &StringRecord,
    builder: &TableBuilder,
    row: usize,
) -> Result<(u64, Vec<f64>), LoadError> {
    if record.len() != builder.field_count() {
        return Err(LoadError::MalformedRow {
            row,
            defect: RowDefect::FieldCount {
                expected: builder.field_count(),
                found: record.len(),
            },
        });
    }

    let step_position = builder.step_position();
    let step_field = &record[step_position];
    let step = step_field.parse::<u64>().map_err(|_| LoadError::MalformedRow {
        row,
        defect: RowDefect::InvalidStep { field: step_field.to_string() },
    })?;

    let values = record
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != step_position)
        .zip(builder.columns())
        .map(|((_, field), column)| {
            field.parse::<f64>().map_err(|_| LoadError::MalformedRow {
                row,
                defect: RowDefect::InvalidNumber {
                    column: column.clone(),
                    field: field.to_string(),
                },
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((step, values))
}

/// Map a reader error onto the load taxonomy. `row` 0 is the header.
fn convert_error(err: csv::Error, name: &str, row: usize) -> LoadError {
    match err.into_kind() {
        ErrorKind::Io(source) => LoadError::SourceNotFound {
            name: name.to_string(),
            source,
        },
        ErrorKind::Utf8 { .. } => LoadError::MalformedRow {
            row,
            defect: RowDefect::Encoding,
        },
        ErrorKind::UnequalLengths { expected_len, len, .. } => LoadError::MalformedRow {
            row,
            defect: RowDefect::FieldCount {
                expected: expected_len as usize,
                found: len as usize,
            },
        },
        other => LoadError::SourceNotFound {
            name: name.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, format!("{other:?}")),
        },
    }
}

// =================================================================================================
// Tests
// =================================================================================================
