//! Two-panel diagnostic figure
//!
//! [`render`] turns a [`DiagnosticTable`] into a [`RenderedFigure`]: the data
//! points, axis ranges and labels of both panels, ready to be drawn. It is a
//! pure transformation; drawing to a file is done by
//! `RenderedFigure::save` in the `draw` module.
//!
//! ```text
//! ┌──────────────────────────┬──────────────────────────┐
//! │ Total Kinetic Energy     │ Mass Conservation        │
//! │ y: auto range            │ y: conservation band     │
//! │ x: Time step             │ x: Time step             │
//! └──────────────────────────┴──────────────────────────┘
//! ```

use plotters::style::RGBColor;

use super::config::{FigureConfig, PlotConfig};
use super::scaling::AxisRange;
use crate::diagnostics::DiagnosticTable;

/// Half-width of the step axis when the table has a single row
const SINGLE_STEP_PADDING: f64 = 0.5;

/// One chart of the figure: a connected line in step order
#[derive(Debug, Clone)]
pub struct Panel {
    pub config: PlotConfig,
    /// `(step, value)` in row order
    pub points: Vec<(f64, f64)>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

impl Panel {
    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Figure with the stability panel on the left and the conservation panel on
/// the right
#[derive(Debug, Clone)]
pub struct RenderedFigure {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub stability: Panel,
    pub conservation: Panel,
}

impl RenderedFigure {
    /// Panels from left to right
    pub fn panels(&self) -> [&Panel; 2] {
        [&self.stability, &self.conservation]
    }
}

/// Lay out the stability and conservation charts of a loaded table.
///
/// The stability panel's y-axis is auto-scaled so runaway growth stays
/// visible. The conservation panel's y-axis follows `config.band`.
pub fn render(table: &DiagnosticTable, config: &FigureConfig) -> RenderedFigure {
    let steps: Vec<f64> = table.steps().into_iter().map(|s| s as f64).collect();
    let (first, last) = table.step_span();
    let x_range = AxisRange::padded(first as f64, last as f64, 0.0, SINGLE_STEP_PADDING);

    let kinetic_energy = table.kinetic_energy();
    let total_mass = table.total_mass();

    let stability = Panel {
        config: config.stability.clone(),
        y_range: AxisRange::auto(&kinetic_energy, config.band.absolute_padding),
        points: zip_points(&steps, &kinetic_energy),
        x_range,
    };

    let conservation = Panel {
        config: config.conservation.clone(),
        y_range: config.band.range(&total_mass),
        points: zip_points(&steps, &total_mass),
        x_range,
    };

    log::debug!(
        "rendered {} steps, energy axis [{}, {}], mass axis [{}, {}]",
        steps.len(),
        stability.y_range.lower,
        stability.y_range.upper,
        conservation.y_range.lower,
        conservation.y_range.upper
    );

    RenderedFigure {
        width: config.width,
        height: config.height,
        background: config.background,
        stability,
        conservation,
    }
}

fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

// =================================================================================================
// Tests
// =================================================================================================
