//! Diagnostic data model
//!
//! A simulation writes one line of scalar diagnostics per time step. This
//! module holds the validated in-memory form of that log.
//!
//! # Core Concepts
//!
//! - **DiagnosticTable**: immutable, step-ordered rows of named metrics
//! - **TableBuilder**: row-by-row validation used by every loader
//! - **LoadError**: the fatal error taxonomy of table construction
//!
//! # Example
//!
//! ```rust
//! use sim_diagnostics::diagnostics::{DiagnosticRow, DiagnosticTable};
//!
//! let table = DiagnosticTable::from_rows(
//!     &["Step", "KineticEnergy", "TotalMass"],
//!     vec![
//!         DiagnosticRow::new(0, vec![10.0, 50.0]),
//!         DiagnosticRow::new(1, vec![10.2, 50.0]),
//!     ],
//! )?;
//!
//! assert_eq!(table.steps(), vec![0, 1]);
//! assert_eq!(table.total_mass(), vec![50.0, 50.0]);
//! # Ok::<(), sim_diagnostics::diagnostics::LoadError>(())
//! ```

pub mod error;
pub mod table;

pub use error::{LoadError, RowDefect};
pub use table::{
    DiagnosticRow,
    DiagnosticTable,
    TableBuilder,
    KINETIC_ENERGY,
    REQUIRED_COLUMNS,
    STEP,
    TOTAL_MASS,
};
