//! Loading of diagnostic logs
//!
//! # Architecture
//!
//! This module defines the [`Loader`] trait that abstracts the log format.
//! Each format lives in its own sub-module and only has to turn a byte
//! stream into rows; opening the source and mapping open failures to
//! [`LoadError::SourceNotFound`] is shared by the trait.
//!
//! # Available formats
//!
//! | Format | Module  |
//! |--------|---------|
//! | CSV    | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use sim_diagnostics::input::{load, CsvLoader, CsvLoadConfig, Loader};
//!
//! // Default CSV dialect
//! let table = load("build/simulation_log.csv")?;
//!
//! // Semicolon-separated log
//! let loader = CsvLoader::new(CsvLoadConfig::european());
//! let table = loader.load("build/simulation_log_eu.csv")?;
//! # Ok::<(), sim_diagnostics::LoadError>(())
//! ```

pub mod csv;

pub use self::csv::{CsvLoadConfig, CsvLoader};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::diagnostics::{DiagnosticTable, LoadError};

/// Abstraction over diagnostic log formats.
///
/// Loading is all-or-nothing: an implementation must return an error on the
/// first defect and never a partially filled table.
pub trait Loader {
    /// Read a whole log from `reader`.
    ///
    /// `name` identifies the source in errors and log messages.
    fn load_reader(&self, reader: &mut dyn Read, name: &str) -> Result<DiagnosticTable, LoadError>;

    /// Open `path` and read it with [`Loader::load_reader`].
    ///
    /// # Errors
    ///
    /// [`LoadError::SourceNotFound`] if the file cannot be opened, otherwise
    /// whatever the format reports.
    fn load(&self, path: impl AsRef<Path>) -> Result<DiagnosticTable, LoadError>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let name = path.display().to_string();
        let mut file = File::open(path).map_err(|source| LoadError::SourceNotFound {
            name: name.clone(),
            source,
        })?;
        self.load_reader(&mut file, &name)
    }
}

/// Load a comma-separated diagnostic log with the default dialect.
pub fn load(path: impl AsRef<Path>) -> Result<DiagnosticTable, LoadError> {
    CsvLoader::default().load(path)
}

/// Load a CSV diagnostic log written in the dialect described by `config`.
pub fn load_with(path: impl AsRef<Path>, config: &CsvLoadConfig) -> Result<DiagnosticTable, LoadError> {
    CsvLoader::new(config.clone()).load(path)
}

/// Read a CSV diagnostic log from any byte stream, e.g. an in-memory buffer.
///
/// `name` identifies the source in errors and log messages.
pub fn load_from_reader<R: Read>(
    mut reader: R,
    name: &str,
    config: &CsvLoadConfig,
) -> Result<DiagnosticTable, LoadError> {
    CsvLoader::new(config.clone()).load_reader(&mut reader, name)
}

// =================================================================================================
// Tests
// =================================================================================================
