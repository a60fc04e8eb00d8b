//! sim-diagnostics: Stability and Conservation Charts for Simulation Logs
//!
//! A time-stepped solver writes one line of scalar diagnostics per step.
//! This crate loads that log and draws two side-by-side charts:
//!
//! - **Stability**: kinetic energy vs step, auto-scaled so runaway growth is obvious
//! - **Conservation**: total mass vs step, zoomed to a tolerance band around
//!   its own min/max so that small drifts are visible
//!
//! # Architecture
//!
//! 1. **Loading** ([`input`]) reads the log into a validated
//!    [`DiagnosticTable`]. Any defect aborts the load: no partial tables.
//! 2. **Rendering** ([`output`]) lays out both panels and writes a PNG or SVG.
//!
//! # Quick Start
//!
//! ```rust
//! use sim_diagnostics::prelude::*;
//!
//! let log = "Step,KineticEnergy,TotalMass\n0,10.0,50.0\n1,10.2,50.0\n2,9.9,50.1\n";
//! let table = CsvLoader::default().load_reader(&mut log.as_bytes(), "inline")?;
//! assert_eq!(table.steps(), vec![0, 1, 2]);
//!
//! let figure = render(&table, &FigureConfig::default());
//! assert!(figure.conservation.y_range.brackets(50.0, 50.1));
//! // figure.save("diagnostics.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`diagnostics`]: Data model and load errors
//! - [`input`]: Log loaders (CSV)
//! - [`output`]: Figure layout and drawing

pub mod diagnostics;
pub mod input;
pub mod output;

pub use diagnostics::{DiagnosticRow, DiagnosticTable, LoadError, RowDefect};
pub use input::{load, load_from_reader, load_with};
pub use output::{plot_diagnostics, render, RenderError};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use sim_diagnostics::prelude::*;
    //! ```
    pub use crate::diagnostics::{DiagnosticRow,
                                 DiagnosticTable,
                                 LoadError};
    pub use crate::input::{load,
                           load_from_reader,
                           load_with,
                           CsvLoadConfig,
                           CsvLoader,
                           Loader};
    pub use crate::output::{plot_diagnostics,
                            render,
                            ConservationBand,
                            FigureConfig,
                            PlotConfig,
                            RenderError,
                            RenderedFigure};
}
