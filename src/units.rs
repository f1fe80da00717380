use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pixels per rem. Fixed at the browser default root font size.
pub const REM_BASE: f64 = 16.0;

/// Output unit for generated CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Px,
    Rem,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "px" => Ok(Unit::Px),
            "rem" => Ok(Unit::Rem),
            other => Err(format!("unknown unit '{other}', expected px or rem")),
        }
    }
}

pub fn to_pixels(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Px => value,
        Unit::Rem => value * REM_BASE,
    }
}

pub fn to_unit(pixel_value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Px => pixel_value,
        Unit::Rem => pixel_value / REM_BASE,
    }
}

/// Re-express a stored dimensional value when the editor switches units.
///
/// px → rem keeps four decimals (`13px` → `0.8125`); rem → px rounds to a
/// whole pixel.
pub fn convert_stored(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Px, Unit::Rem) => crate::format::to_fixed(value / REM_BASE, 4)
            .parse()
            .unwrap_or(value / REM_BASE),
        (Unit::Rem, Unit::Px) => (value * REM_BASE).round(),
        _ => value,
    }
}
