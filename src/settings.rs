use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::clamp::ViewportRange;
use crate::error::{ForgeError, Result};
use crate::scale::{BaseSizes, DEFAULT_MAX_BASE_SIZE, DEFAULT_MIN_BASE_SIZE};
use crate::units::Unit;

pub const DEFAULT_MIN_VIEWPORT: f64 = 375.0;
pub const DEFAULT_MAX_VIEWPORT: f64 = 1620.0;

/// Range offered by the base-size inputs.
pub const BASE_SIZE_RANGE: RangeInclusive<f64> = 1.0..=200.0;
/// Range offered by the viewport inputs.
pub const VIEWPORT_RANGE: RangeInclusive<f64> = 200.0..=5000.0;

/// Global scaling settings shared by every button class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub min_base_size: f64,
    pub max_base_size: f64,
    pub min_viewport: f64,
    pub max_viewport: f64,
    pub unit_type: Unit,
    pub autosave_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_base_size: DEFAULT_MIN_BASE_SIZE,
            max_base_size: DEFAULT_MAX_BASE_SIZE,
            min_viewport: DEFAULT_MIN_VIEWPORT,
            max_viewport: DEFAULT_MAX_VIEWPORT,
            unit_type: Unit::Px,
            autosave_enabled: true,
        }
    }
}

impl Settings {
    /// Reject settings that would put `NaN` or `Infinity` into generated CSS.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("minBaseSize", self.min_base_size),
            ("maxBaseSize", self.max_base_size),
        ] {
            if !value.is_finite() {
                return Err(ForgeError::NonFinite { field });
            }
        }
        if self.max_base_size <= 0.0 {
            return Err(ForgeError::InvalidBaseSize {
                max: self.max_base_size,
            });
        }
        self.viewport().map(|_| ())
    }

    pub fn viewport(&self) -> Result<ViewportRange> {
        ViewportRange::new(self.min_viewport, self.max_viewport)
    }

    pub fn base_sizes(&self) -> BaseSizes {
        BaseSizes {
            min: self.min_base_size,
            max: self.max_base_size,
        }
    }

    /// Values outside the ranges the editor inputs offer. Not errors; the
    /// math works for any valid settings.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (field, value, range) in [
            ("minBaseSize", self.min_base_size, &BASE_SIZE_RANGE),
            ("maxBaseSize", self.max_base_size, &BASE_SIZE_RANGE),
            ("minViewport", self.min_viewport, &VIEWPORT_RANGE),
            ("maxViewport", self.max_viewport, &VIEWPORT_RANGE),
        ] {
            if !range.contains(&value) {
                warnings.push(format!(
                    "{field} {value} is outside the usual range {}..={}",
                    range.start(),
                    range.end()
                ));
            }
        }
        if self.min_base_size > self.max_base_size {
            warnings.push(format!(
                "minBaseSize {} is larger than maxBaseSize {}; buttons shrink on wide screens",
                self.min_base_size, self.max_base_size
            ));
        }
        warnings
    }
}
