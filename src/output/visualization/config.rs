//! Plot configuration for the diagnostic figure
//!
//! A figure is made of two panels. Each panel has its own [`PlotConfig`]
//! (title, labels, colours) and the figure as a whole is described by
//! [`FigureConfig`] (size, background, conservation band).

use plotters::prelude::*;

use super::scaling::ConservationBand;

/// X-axis label shared by both panels
pub const STEP_AXIS_LABEL: &str = "Time step";

/// Configuration for one panel
///
/// # Fields
///
/// - `title`: Panel title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Colour of the series line
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to draw mesh lines and axis descriptions
///
/// # Example
///
/// ```rust
/// use sim_diagnostics::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::conservation("Mass (D2Q9, 256x256)");
/// config.line_color = BLUE;
/// config.line_width = 3;
/// ```
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Panel title (default: "Plot")
    pub title: String,

    /// X-axis label (default: "Time step")
    pub xlabel: String,

    /// Y-axis label (default: empty, set by panel type)
    pub ylabel: String,

    /// Line color (default: RED)
    pub line_color: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Plot".to_string(),
            xlabel: STEP_AXIS_LABEL.to_string(),
            ylabel: String::new(), // Set by specific panel type
            line_color: RED,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust
/// use sim_diagnostics::output::visualization::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::stability(NO_TITLE);
/// assert_eq!(config.title, "Total Kinetic Energy (Stability)");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for the stability panel (kinetic energy vs step)
    ///
    /// Sets ylabel to "Energy" and title to custom value or
    /// "Total Kinetic Energy (Stability)"
    pub fn stability(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Total Kinetic Energy (Stability)".to_string()),
            ylabel: "Energy".to_string(),
            line_color: BLUE,
            ..Self::default()
        }
    }

    /// Create config for the conservation panel (total mass vs step)
    ///
    /// Sets ylabel to "Mass" and title to custom value or "Mass Conservation"
    pub fn conservation(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Mass Conservation".to_string()),
            ylabel: "Mass".to_string(),
            line_color: RGBColor(255, 127, 14), // Orange
            ..Self::default()
        }
    }
}

/// Configuration for the whole two-panel figure
///
/// The default matches a 10 x 5 inch figure at 100 dpi.
#[derive(Debug, Clone)]
pub struct FigureConfig {
    /// Image width in pixels (default: 1000)
    pub width: u32,

    /// Image height in pixels (default: 500)
    pub height: u32,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Left panel
    pub stability: PlotConfig,

    /// Right panel
    pub conservation: PlotConfig,

    /// Y-axis policy of the conservation panel
    pub band: ConservationBand,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            background: WHITE,
            stability: PlotConfig::stability(NO_TITLE),
            conservation: PlotConfig::conservation(NO_TITLE),
            band: ConservationBand::default(),
        }
    }
}

impl FigureConfig {
    /// Builder pattern: set image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: set relative tolerance of the conservation band
    ///
    /// Negative or non-finite values count as zero when the band is computed.
    pub fn tolerance(mut self, relative_margin: f64) -> Self {
        self.band.relative_margin = relative_margin;
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================
