//! Visualization of diagnostic logs
//!
//! This module turns a loaded [`DiagnosticTable`](crate::diagnostics::DiagnosticTable)
//! into a two-panel figure using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Panel and figure configuration (`PlotConfig`, `FigureConfig`)
//! - **scaling**: Axis ranges, including the conservation band
//! - **figure**: Pure layout of both panels (`render`, `RenderedFigure`)
//! - **draw**: Writing a figure to PNG/SVG (`RenderedFigure::save`)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sim_diagnostics::input::load;
//! use sim_diagnostics::output::visualization::{render, FigureConfig};
//!
//! let table = load("build/simulation_log.csv")?;
//!
//! // Default layout, 1% conservation band
//! let figure = render(&table, &FigureConfig::default());
//! figure.save("diagnostics.png")?;
//!
//! // Wider band, vector output
//! let config = FigureConfig::default().tolerance(0.05);
//! render(&table, &config).save("diagnostics.svg")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Panels
//!
//! | Panel | Series | Y-axis |
//! |-------|--------|--------|
//! | Stability (left) | `KineticEnergy` vs step | data range + 5% |
//! | Conservation (right) | `TotalMass` vs step | data range + ε of range |

pub mod config;
pub mod draw;
pub mod figure;
pub mod scaling;

pub use config::{FigureConfig, IntoOptionalTitle, PlotConfig, NO_TITLE, STEP_AXIS_LABEL};
pub use draw::{plot_diagnostics, RenderError};
pub use figure::{render, Panel, RenderedFigure};
pub use scaling::{AxisRange, ConservationBand};
