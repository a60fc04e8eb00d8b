//! Drawing a [`RenderedFigure`] with plotters
//!
//! The output format is chosen from the file extension: `.svg` uses the
//! vector backend, anything else the bitmap backend (PNG by default).

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use thiserror::Error;

use super::config::FigureConfig;
use super::figure::{render, Panel, RenderedFigure};
use super::scaling::AxisRange;
use crate::diagnostics::DiagnosticTable;

/// Failure to draw a figure
#[derive(Debug, Error)]
pub enum RenderError {
    /// The backend failed (unwritable path, unsupported format, fonts)
    #[error("drawing backend error: {0}")]
    Backend(String),

    /// An axis has no finite, positive width, e.g. data spanning most of the
    /// f64 range.
    #[error("{axis} axis of '{panel}' cannot be drawn: [{lower}, {upper}]")]
    UndrawableAxis {
        panel: String,
        axis: char,
        lower: f64,
        upper: f64,
    },
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Backend(err.to_string())
    }
}

impl RenderedFigure {
    /// Write the figure to `output_path` (`.svg` -> vector, otherwise bitmap).
    ///
    /// # Errors
    ///
    /// Returns `Err` if an axis range is not drawable (nothing is written
    /// then) or if the backend cannot write to `output_path`.
    pub fn save(&self, output_path: impl AsRef<Path>) -> Result<(), RenderError> {
        for panel in self.panels() {
            check_axes(panel)?;
        }

        let output_path = output_path.as_ref();
        let ext = output_path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("png");

        match ext {
            "svg" => {
                let backend = SVGBackend::new(output_path, (self.width, self.height));
                draw_figure(backend, self)?;
            }
            _ => {
                let backend = BitMapBackend::new(output_path, (self.width, self.height));
                draw_figure(backend, self)?;
            }
        }

        log::info!("diagnostic figure written to {}", output_path.display());
        Ok(())
    }
}

/// Render `table` and write the figure to `output_path`.
///
/// # Arguments
///
/// * `table`      : Loaded diagnostic log
/// * `output_path`: Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`     : Optional figure configuration; `None` uses defaults
///
/// # Example
///
/// ```rust,no_run
/// use sim_diagnostics::input::load;
/// use sim_diagnostics::output::visualization::plot_diagnostics;
///
/// let table = load("build/simulation_log.csv")?;
/// plot_diagnostics(&table, "diagnostics.png", None)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn plot_diagnostics(
    table: &DiagnosticTable,
    output_path: impl AsRef<Path>,
    config: Option<&FigureConfig>,
) -> Result<RenderedFigure, RenderError> {
    let default_config = FigureConfig::default();
    let config = config.unwrap_or(&default_config);

    let figure = render(table, config);
    figure.save(output_path)?;
    Ok(figure)
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

fn draw_figure<DB: DrawingBackend>(backend: DB, figure: &RenderedFigure) -> Result<(), RenderError> {
    let root = backend.into_drawing_area();
    root.fill(&figure.background)?;

    let areas = root.split_evenly((1, 2));
    for (area, panel) in areas.iter().zip(figure.panels()) {
        draw_panel(area, panel)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
) -> Result<(), RenderError> {
    let config = &panel.config;

    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, ("sans-serif", 22).into_font())
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(75)
        .build_cartesian_2d(panel.x_range.as_range(), panel.y_range.as_range())?;

    let y_precision = tick_precision(&panel.y_range);
    let x_formatter = |x: &f64| format!("{:.0}", x);
    let y_formatter = |y: &f64| format!("{:.*}", y_precision, y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    chart.draw_series(LineSeries::new(
        panel.points.iter().copied(),
        ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
    ))?;

    Ok(())
}

fn check_axes(panel: &Panel) -> Result<(), RenderError> {
    for (axis, range) in [('x', &panel.x_range), ('y', &panel.y_range)] {
        if !range.is_drawable() {
            return Err(RenderError::UndrawableAxis {
                panel: panel.title().to_string(),
                axis,
                lower: range.lower,
                upper: range.upper,
            });
        }
    }
    Ok(())
}

/// Decimals needed to tell apart ~5 ticks spread over `range`
fn tick_precision(range: &AxisRange) -> usize {
    let step = range.width() / 5.0;
    if !(step.is_finite() && step > 0.0) {
        return 3;
    }
    (-step.log10()).ceil().clamp(0.0, 12.0) as usize
}

// =================================================================================================
// Tests
// =================================================================================================
