pub mod button;
pub mod clamp;
pub mod css;
pub mod error;
pub mod format;
pub mod project;
pub mod scale;
pub mod settings;
pub mod units;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use button::{ButtonClass, ButtonSet, ButtonState, ColorState, StateColors};
pub use clamp::{generate, ViewportRange};
pub use error::{ForgeError, Result};
pub use project::Project;
pub use scale::{Property, ScaledRange};
pub use settings::Settings;
pub use units::Unit;

/// Generate the full stylesheet for a project document given as JSON.
pub fn compile_css(project_json: &str) -> Result<String> {
    Project::from_json(project_json)?.generate_css()
}

/// Generate one fluid value using the project settings' viewport and unit.
///
/// `max_value` is the size at the max viewport; the min is derived from the
/// base-size ratio exactly as a button property would be.
pub fn fluid_property(max_value: f64, property: Property, settings: &Settings) -> Result<String> {
    settings.validate()?;
    let unit = settings.unit_type;
    let range = scale::scale(Some(max_value), unit, property, &settings.base_sizes())?;
    clamp::fluid_value_from_px(range.min, range.max, &settings.viewport()?, unit)
}
