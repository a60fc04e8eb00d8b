//! Axis range computation
//!
//! Plotters needs explicit coordinate ranges, so every panel axis is computed
//! here from the data. Two policies exist:
//!
//! - **auto**: data range plus a fraction of it on each side
//!   ([`AxisRange::auto`], used by the stability panel)
//! - **conservation band**: the data range expanded by a small tolerance of
//!   itself ([`ConservationBand`]), so that drifts of 0.1% to 1% of a
//!   near-constant quantity fill the panel instead of vanishing into a flat line
//!
//! Both expand outward from the true min/max by a fraction of the range
//! magnitude, never by scaling the endpoints, so the padding direction does
//! not depend on the sign of the data.
//!
//! When the data range is zero (constant series or a single row), a fixed
//! absolute padding is used instead so the axis never has zero width.

/// Margin of the auto-scaled axis, as a fraction of the data range
pub const AUTO_MARGIN: f64 = 0.05;

/// Default relative tolerance of the conservation band (1%)
pub const DEFAULT_RELATIVE_MARGIN: f64 = 0.01;

/// Default absolute half-width used when the data range is zero
pub const DEFAULT_ABSOLUTE_PADDING: f64 = 1e-3;

/// Closed interval `[lower, upper]` of an axis, `lower < upper`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub lower: f64,
    pub upper: f64,
}

impl AxisRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Expand `[min, max]` by `margin * (max - min)` on both sides.
    ///
    /// If `max <= min` the result is `[min - p, min + p]` where `p` is
    /// `padding`, raised if needed so that it is still resolvable at the
    /// magnitude of `min`.
    ///
    /// A negative or non-finite `margin` (or `padding`) counts as zero. Bounds
    /// are clamped to `±f64::MAX`, so the result is always finite for finite
    /// input.
    pub fn padded(min: f64, max: f64, margin: f64, padding: f64) -> Self {
        let margin = non_negative(margin);
        if max > min {
            // `max - min` itself overflows for data spanning most of the f64 range
            let pad = (margin * max - margin * min).min(f64::MAX);
            Self::new(saturate(min - pad), saturate(max + pad))
        } else {
            let pad = resolvable_padding(min, non_negative(padding));
            Self::new(saturate(min - pad), saturate(min + pad))
        }
    }

    /// Data range of `values` plus [`AUTO_MARGIN`], with `padding` as the
    /// zero-range fallback.
    ///
    /// Non-finite values are ignored. An empty series gives `[0, 1]`.
    pub fn auto(values: &[f64], padding: f64) -> Self {
        match min_max(values) {
            Some((min, max)) => Self::padded(min, max, AUTO_MARGIN, padding),
            None => Self::new(0.0, 1.0),
        }
    }

    /// `upper - lower`
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// `lower <= value <= upper`
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// `lower < value < upper`
    pub fn strictly_contains(&self, value: f64) -> bool {
        self.lower < value && value < self.upper
    }

    /// Whether the whole `[min, max]` lies inside the range
    pub fn brackets(&self, min: f64, max: f64) -> bool {
        self.contains(min) && self.contains(max)
    }

    /// Finite bounds, `lower < upper`, and a width representable as f64.
    ///
    /// Plotters divides by the width when mapping coordinates and cannot
    /// place ticks on an infinite one.
    pub fn is_drawable(&self) -> bool {
        self.lower.is_finite()
            && self.upper.is_finite()
            && self.lower < self.upper
            && self.width().is_finite()
    }

    pub fn as_range(&self) -> std::ops::Range<f64> {
        self.lower..self.upper
    }
}

/// Y-axis policy of the conservation panel
///
/// The axis spans `[min - ε·range, max + ε·range]` with `range = max - min`
/// and `ε = relative_margin`. For a zero range it spans
/// `[v - absolute_padding, v + absolute_padding]`.
///
/// # Example
///
/// ```rust
/// use sim_diagnostics::output::visualization::ConservationBand;
///
/// let range = ConservationBand::default().range(&[100.0, 99.5, 100.3]);
/// assert!((range.lower - 99.492).abs() < 1e-9);
/// assert!((range.upper - 100.308).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservationBand {
    /// ε, fraction of the data range added on each side (default: 0.01)
    pub relative_margin: f64,

    /// Half-width used when all values are equal (default: 1e-3)
    pub absolute_padding: f64,
}

impl Default for ConservationBand {
    fn default() -> Self {
        Self {
            relative_margin: DEFAULT_RELATIVE_MARGIN,
            absolute_padding: DEFAULT_ABSOLUTE_PADDING,
        }
    }
}

impl ConservationBand {
    pub fn new(relative_margin: f64, absolute_padding: f64) -> Self {
        Self { relative_margin, absolute_padding }
    }

    /// Axis range for a conserved series.
    pub fn range(&self, values: &[f64]) -> AxisRange {
        match min_max(values) {
            Some((min, max)) => {
                AxisRange::padded(min, max, self.relative_margin, self.absolute_padding)
            }
            None => AxisRange::padded(0.0, 0.0, self.relative_margin, self.absolute_padding),
        }
    }
}

/// Minimum and maximum of the finite values, `None` if there are none
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn non_negative(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 {
        x
    } else {
        0.0
    }
}

fn saturate(x: f64) -> f64 {
    x.clamp(-f64::MAX, f64::MAX)
}

/// Padding that still separates `value - p` from `value + p` at f64 precision.
fn resolvable_padding(value: f64, padding: f64) -> f64 {
    padding
        .max(value.abs() * f64::EPSILON * 64.0)
        .max(f64::EPSILON)
}

// =================================================================================================
// Tests
// =================================================================================================
