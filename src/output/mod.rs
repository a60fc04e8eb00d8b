//! Output of diagnostic figures
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← Two-panel stability/conservation figure
//!     ├── mod.rs
//!     ├── config.rs
//!     ├── scaling.rs
//!     ├── figure.rs
//!     └── draw.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sim_diagnostics::input::load;
//! use sim_diagnostics::output::plot_diagnostics;
//!
//! let table = load("build/simulation_log.csv")?;
//! plot_diagnostics(&table, "diagnostics.png", None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    plot_diagnostics,
    render,
    ConservationBand,
    FigureConfig,
    PlotConfig,
    RenderError,
    RenderedFigure,
};
