//! Fluid `clamp()` expression generation.
//!
//! A fluid value equals its minimum at the minimum viewport width, its maximum
//! at the maximum viewport width, and moves linearly in between:
//!
//! ```text
//! clamp(<min>, calc(<constant> + <coefficient>vw), <max>)
//! ```

use crate::error::{ForgeError, Result};
use crate::format::{js_number, to_fixed, trim_fixed};
use crate::units::{to_pixels, to_unit, Unit, REM_BASE};

/// Screen-width anchors for interpolation, in pixels.
///
/// Construction guarantees a positive span, so the slope never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRange {
    min: f64,
    max: f64,
}

impl ViewportRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() {
            return Err(ForgeError::NonFinite {
                field: "minViewport",
            });
        }
        if !max.is_finite() {
            return Err(ForgeError::NonFinite {
                field: "maxViewport",
            });
        }
        if max <= min {
            return Err(ForgeError::InvalidViewport { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Linear interpolation between two pixel values across a viewport range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidSlope {
    pub min_px: f64,
    pub max_px: f64,
    /// Multiplier on `1vw` (one percent of the viewport width).
    pub coefficient: f64,
    /// Pixel offset of the line at a zero-width viewport.
    pub constant: f64,
}

impl FluidSlope {
    pub fn new(min_px: f64, max_px: f64, viewport: &ViewportRange) -> Self {
        let coefficient = (max_px - min_px) / viewport.span() * 100.0;
        let constant = min_px - coefficient * viewport.min() / 100.0;
        Self {
            min_px,
            max_px,
            coefficient,
            constant,
        }
    }

    /// The unclamped preferred value at `viewport_width`, in pixels.
    pub fn preferred_px(&self, viewport_width: f64) -> f64 {
        self.constant + self.coefficient * viewport_width / 100.0
    }

    /// What the browser resolves the clamp to at `viewport_width`, in pixels.
    pub fn evaluate(&self, viewport_width: f64) -> f64 {
        let lo = self.min_px.min(self.max_px);
        let hi = self.min_px.max(self.max_px);
        self.preferred_px(viewport_width).clamp(lo, hi)
    }
}

/// Build the CSS value for `min_value` at the minimum viewport and `max_value`
/// at the maximum.
///
/// Equal endpoints collapse to a constant. That constant is read as pixels
/// (`16` in rem mode renders `1rem`), while differing endpoints are read in
/// `unit`. Use [`fluid_value_from_px`] when both come from pixel values.
pub fn generate(
    min_value: f64,
    max_value: f64,
    viewport: &ViewportRange,
    unit: Unit,
) -> Result<String> {
    if !min_value.is_finite() {
        return Err(ForgeError::NonFinite { field: "minValue" });
    }
    if !max_value.is_finite() {
        return Err(ForgeError::NonFinite { field: "maxValue" });
    }

    if min_value == max_value {
        return Ok(constant_value(min_value, unit));
    }

    let slope = FluidSlope::new(to_pixels(min_value, unit), to_pixels(max_value, unit), viewport);
    Ok(format!(
        "clamp({}, {}, {})",
        bound(slope.min_px, unit),
        preferred(&slope, unit),
        bound(slope.max_px, unit),
    ))
}

/// Fluid value for a pixel pair, rendered in `unit`.
pub fn fluid_value_from_px(
    min_px: f64,
    max_px: f64,
    viewport: &ViewportRange,
    unit: Unit,
) -> Result<String> {
    if min_px == max_px {
        generate(min_px, max_px, viewport, unit)
    } else {
        generate(to_unit(min_px, unit), to_unit(max_px, unit), viewport, unit)
    }
}

fn constant_value(value: f64, unit: Unit) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    match unit {
        Unit::Px => format!("{}px", js_number(value)),
        Unit::Rem => format!("{}rem", trim_fixed(value / REM_BASE, 3)),
    }
}

fn bound(px: f64, unit: Unit) -> String {
    match unit {
        Unit::Px => format!("{}px", js_number(px)),
        Unit::Rem => format!("{}rem", to_fixed(px / REM_BASE, 3)),
    }
}

fn preferred(slope: &FluidSlope, unit: Unit) -> String {
    let coefficient = format!("{}vw", to_fixed(slope.coefficient, 4));
    if slope.constant == 0.0 {
        return coefficient;
    }
    let constant = match unit {
        Unit::Px => format!("{}px", to_fixed(slope.constant, 2)),
        Unit::Rem => format!("{}rem", to_fixed(slope.constant / REM_BASE, 4)),
    };
    format!("calc({constant} + {coefficient})")
}
