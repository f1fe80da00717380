//! Per-property scaling: from one stored value to a (min, max) pixel pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};
use crate::units::{Unit, REM_BASE};

/// Fallback base sizes when settings carry zeros.
pub const DEFAULT_MIN_BASE_SIZE: f64 = 16.0;
pub const DEFAULT_MAX_BASE_SIZE: f64 = 20.0;

/// Stored rem values for dimensional properties stay below this.
const REM_HEURISTIC_CEILING: f64 = 20.0;

// ── Properties ─────────────────────────────────────────────────────────

/// The seven scalable properties of a button class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    Width,
    Height,
    PaddingX,
    PaddingY,
    FontSize,
    BorderRadius,
    BorderWidth,
}

impl Property {
    /// Declaration order in generated CSS.
    pub const ALL: [Property; 7] = [
        Property::Width,
        Property::Height,
        Property::PaddingX,
        Property::PaddingY,
        Property::FontSize,
        Property::BorderRadius,
        Property::BorderWidth,
    ];

    /// Key used in stored button data.
    pub fn key(self) -> &'static str {
        match self {
            Property::Width => "width",
            Property::Height => "height",
            Property::PaddingX => "paddingX",
            Property::PaddingY => "paddingY",
            Property::FontSize => "fontSize",
            Property::BorderRadius => "borderRadius",
            Property::BorderWidth => "borderWidth",
        }
    }

    /// CSS properties this one expands to.
    pub fn css_names(self) -> &'static [&'static str] {
        match self {
            Property::Width => &["width"],
            Property::Height => &["height"],
            Property::PaddingX => &["padding-left", "padding-right"],
            Property::PaddingY => &["padding-top", "padding-bottom"],
            Property::FontSize => &["font-size"],
            Property::BorderRadius => &["border-radius"],
            Property::BorderWidth => &["border-width"],
        }
    }

    /// Dimensional properties follow the unit setting; the rest are always pixels.
    pub fn is_dimensional(self) -> bool {
        matches!(
            self,
            Property::Width | Property::Height | Property::PaddingX | Property::PaddingY
        )
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Property {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| format!("unknown property '{s}'"))
    }
}

// ── Scaling ────────────────────────────────────────────────────────────

/// Font-size-equivalent anchors at the min and max viewport, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseSizes {
    pub min: f64,
    pub max: f64,
}

/// Pixel values at the minimum and maximum viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledRange {
    pub min: f64,
    pub max: f64,
}

/// Derive the (min, max) pixel pair for one property of one button.
///
/// The stored value is the size at the maximum viewport. The minimum is that
/// size scaled by `min_base / max_base` and rounded to a whole pixel.
/// Missing, non-numeric or non-positive stored values fall back to the base
/// sizes themselves.
pub fn scale(
    stored: Option<f64>,
    unit: Unit,
    property: Property,
    base: &BaseSizes,
) -> Result<ScaledRange> {
    let value = match stored {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => {
            tracing::debug!(%property, ?stored, "no usable stored value, using base sizes");
            return Ok(ScaledRange {
                min: or_default(base.min, DEFAULT_MIN_BASE_SIZE),
                max: or_default(base.max, DEFAULT_MAX_BASE_SIZE),
            });
        }
    };

    if !(base.max > 0.0) {
        return Err(ForgeError::InvalidBaseSize { max: base.max });
    }
    if !base.min.is_finite() {
        return Err(ForgeError::NonFinite {
            field: "minBaseSize",
        });
    }

    let pixels = stored_value_to_px(value, unit, property);
    let min_ratio = base.min / base.max;

    Ok(ScaledRange {
        min: (pixels * min_ratio).round(),
        max: pixels,
    })
}

/// Interpret a stored value as pixels.
///
/// Stored values carry no unit tag. In rem mode a dimensional value below 20 is
/// taken to be rem and multiplied out; anything else is already pixels. A
/// genuine pixel value under 20 (e.g. `paddingY: 8` saved before switching to
/// rem) is therefore read as rem. Scaling is not monotonic across the
/// boundary: `19.99` reads as `319.84px` while `20` reads as `20px`.
pub fn stored_value_to_px(value: f64, unit: Unit, property: Property) -> f64 {
    if unit == Unit::Rem && value < REM_HEURISTIC_CEILING && property.is_dimensional() {
        tracing::trace!(%property, value, "reading stored value as rem");
        value * REM_BASE
    } else {
        value
    }
}

fn or_default(value: f64, default: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        default
    } else {
        value
    }
}

// ── Preview floors ─────────────────────────────────────────────────────

/// Smallest value a live preview renders for a property, in pixels.
///
/// Unknown property names get a floor of 1.
pub fn min_floor(property: &str) -> f64 {
    match property {
        "width" => 40.0,
        "height" => 20.0,
        "paddingX" => 4.0,
        "paddingY" => 2.0,
        "fontSize" => 10.0,
        "borderRadius" | "borderWidth" => 0.0,
        _ => 1.0,
    }
}

/// Which preview a raw value is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewContext {
    /// Full-size preview at the max viewport.
    Main,
    /// Side-by-side preview at the min viewport.
    Min,
    /// Thumbnail on a property card.
    Card,
}

impl PreviewContext {
    pub fn scale_factor(self) -> f64 {
        match self {
            PreviewContext::Main => 1.0,
            PreviewContext::Min => 0.7,
            PreviewContext::Card => 0.6,
        }
    }
}

/// Raw (non-fluid) preview size: the stored value scaled for the context,
/// never below the property's floor.
pub fn preview_value(raw: Option<f64>, property: Property, context: PreviewContext) -> f64 {
    let raw = raw.filter(|v| v.is_finite()).unwrap_or(0.0);
    (raw * context.scale_factor()).max(min_floor(property.key()))
}

// ── Input limits ───────────────────────────────────────────────────────

/// Accepted input range for a property in the current unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyLimits {
    pub min: f64,
    pub max: f64,
}

pub fn limits(property: Property, unit: Unit) -> PropertyLimits {
    let (min, max) = match (property, unit) {
        (Property::Width, Unit::Px) => (30.0, 800.0),
        (Property::Width, Unit::Rem) => (1.875, 50.0),
        (Property::Height, Unit::Px) => (20.0, 150.0),
        (Property::Height, Unit::Rem) => (1.25, 9.375),
        (Property::PaddingX, Unit::Px) => (0.0, 50.0),
        (Property::PaddingX, Unit::Rem) => (0.0, 3.125),
        (Property::PaddingY, Unit::Px) => (0.0, 30.0),
        (Property::PaddingY, Unit::Rem) => (0.0, 1.875),
        (Property::FontSize, _) => (10.0, 32.0),
        (Property::BorderRadius, _) => (0.0, 100.0),
        (Property::BorderWidth, _) => (0.0, 8.0),
    };
    PropertyLimits { min, max }
}

/// Pull an edited value back into its accepted range.
pub fn correct_value(property: Property, value: f64, unit: Unit) -> f64 {
    let PropertyLimits { min, max } = limits(property, unit);
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: BaseSizes = BaseSizes {
        min: 16.0,
        max: 20.0,
    };

    fn range(min: f64, max: f64) -> ScaledRange {
        ScaledRange { min, max }
    }

    fn base(min: f64, max: f64) -> BaseSizes {
        BaseSizes { min, max }
    }

    #[test]
    fn width_scales_by_base_ratio() {
        let r = scale(Some(160.0), Unit::Px, Property::Width, &BASE).unwrap();
        assert_eq!(r, range(128.0, 160.0));
    }

    #[test]
    fn min_is_rounded_max_is_not() {
        let r = scale(Some(13.0), Unit::Px, Property::FontSize, &BASE).unwrap();
        // 13 * 0.8 = 10.4
        assert_eq!(r.min, 10.0);
        assert_eq!(r.max, 13.0);

        let r = scale(Some(12.5), Unit::Px, Property::FontSize, &BASE).unwrap();
        assert_eq!(r.min, 10.0);
        assert_eq!(r.max, 12.5);

        // 15 * 0.9 = 13.5 rounds up
        let sizes = base(18.0, 20.0);
        let r = scale(Some(15.0), Unit::Px, Property::FontSize, &sizes).unwrap();
        assert_eq!(r.min, 14.0);
    }

    #[test]
    fn missing_or_non_positive_falls_back_to_base() {
        for stored in [None, Some(0.0), Some(-4.0), Some(f64::NAN)] {
            let r = scale(stored, Unit::Px, Property::BorderWidth, &BASE).unwrap();
            assert_eq!(r, range(16.0, 20.0), "{stored:?}");
        }
    }

    #[test]
    fn zero_base_sizes_fall_back_to_defaults() {
        let sizes = base(0.0, 0.0);
        let r = scale(None, Unit::Px, Property::Width, &sizes).unwrap();
        assert_eq!(r, range(16.0, 20.0));
    }

    #[test]
    fn zero_max_base_is_a_configuration_error() {
        let sizes = base(16.0, 0.0);
        let err = scale(Some(160.0), Unit::Px, Property::Width, &sizes).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidBaseSize { .. }));
    }

    #[test]
    fn small_rem_dimensions_are_read_as_rem() {
        let r = scale(Some(10.0), Unit::Rem, Property::Width, &BASE).unwrap();
        assert_eq!(r, range(128.0, 160.0));

        let r = scale(Some(0.5), Unit::Rem, Property::PaddingY, &BASE).unwrap();
        assert_eq!(r, range(6.0, 8.0));
    }

    #[test]
    fn large_rem_dimensions_are_read_as_pixels() {
        let r = scale(Some(160.0), Unit::Rem, Property::Width, &BASE).unwrap();
        assert_eq!(r, range(128.0, 160.0));
    }

    #[test]
    fn pixel_only_properties_ignore_rem_mode() {
        let r = scale(Some(16.0), Unit::Rem, Property::FontSize, &BASE).unwrap();
        assert_eq!(r, range(13.0, 16.0));
        assert_eq!(stored_value_to_px(2.0, Unit::Rem, Property::BorderWidth), 2.0);
    }

    #[test]
    fn scaling_is_monotonic() {
        let mut prev = range(f64::MIN, f64::MIN);
        for step in 1..400 {
            let stored = f64::from(step) * 0.5;
            let r = scale(Some(stored), Unit::Px, Property::Width, &BASE).unwrap();
            assert!(r.min >= prev.min && r.max >= prev.max, "{stored}: {r:?} < {prev:?}");
            prev = r;
        }
    }

    #[test]
    fn rem_reading_jumps_at_twenty() {
        let below = scale(Some(19.99), Unit::Rem, Property::Width, &BASE).unwrap();
        let at = scale(Some(20.0), Unit::Rem, Property::Width, &BASE).unwrap();
        assert!((below.max - 319.84).abs() < 1e-9, "{below:?}");
        assert_eq!(at, range(16.0, 20.0));
        assert!(at.max < below.max);

        // Pixel-only properties have no jump.
        let font = scale(Some(19.99), Unit::Rem, Property::FontSize, &BASE).unwrap();
        assert_eq!(font.max, 19.99);
    }

    #[test]
    fn floor_table() {
        assert_eq!(min_floor("width"), 40.0);
        assert_eq!(min_floor("height"), 20.0);
        assert_eq!(min_floor("paddingX"), 4.0);
        assert_eq!(min_floor("paddingY"), 2.0);
        assert_eq!(min_floor("fontSize"), 10.0);
        assert_eq!(min_floor("borderRadius"), 0.0);
        assert_eq!(min_floor("borderWidth"), 0.0);
        assert_eq!(min_floor("lineHeight"), 1.0);
        assert_eq!(min_floor(""), 1.0);
    }

    #[test]
    fn preview_respects_floor() {
        assert_eq!(preview_value(Some(160.0), Property::Width, PreviewContext::Main), 160.0);
        assert_eq!(preview_value(Some(50.0), Property::Width, PreviewContext::Card), 40.0);
        let min_height = preview_value(Some(40.0), Property::Height, PreviewContext::Min);
        assert!((min_height - 28.0).abs() < 1e-9);
        assert_eq!(preview_value(None, Property::FontSize, PreviewContext::Main), 10.0);
    }

    #[test]
    fn limits_follow_unit() {
        assert_eq!(
            limits(Property::Width, Unit::Rem),
            PropertyLimits {
                min: 1.875,
                max: 50.0
            }
        );
        assert_eq!(limits(Property::FontSize, Unit::Rem), limits(Property::FontSize, Unit::Px));
        assert_eq!(correct_value(Property::Height, 200.0, Unit::Px), 150.0);
        assert_eq!(correct_value(Property::PaddingY, -1.0, Unit::Rem), 0.0);
        assert_eq!(correct_value(Property::BorderWidth, 3.0, Unit::Px), 3.0);
    }

    #[test]
    fn property_keys_round_trip() {
        for p in Property::ALL {
            assert_eq!(p.key().parse::<Property>(), Ok(p));
        }
        assert!("lineHeight".parse::<Property>().is_err());
        assert_eq!(Property::PaddingX.css_names(), ["padding-left", "padding-right"]);
    }
}
