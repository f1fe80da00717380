//! WASM bindings for the button forge.
//!
//! Exposes CSS generation to the browser-side editor via wasm-bindgen.
//! Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;

use crate::project::Project;
use crate::settings::Settings;
use crate::units::Unit;

fn js_err(e: crate::error::ForgeError) -> JsError {
    JsError::new(&e.to_string())
}

/// Generate a single fluid value from a (min, max) pair.
///
/// `unit` is `"px"` or `"rem"`. Throws on an empty or inverted viewport range.
#[wasm_bindgen]
pub fn generate_clamp(
    min_value: f64,
    max_value: f64,
    min_viewport: f64,
    max_viewport: f64,
    unit: &str,
) -> Result<String, JsError> {
    let unit: Unit = unit.parse().map_err(|e: String| JsError::new(&e))?;
    let viewport = crate::clamp::ViewportRange::new(min_viewport, max_viewport).map_err(js_err)?;
    crate::clamp::generate(min_value, max_value, &viewport, unit).map_err(js_err)
}

/// Generate the stylesheet for every button class in a project JSON document.
#[wasm_bindgen]
pub fn generate_css(project_json: &str) -> Result<String, JsError> {
    let project = Project::from_json(project_json).map_err(js_err)?;
    project.generate_css().map_err(js_err)
}

/// Generate the stylesheet for one named button class.
#[wasm_bindgen]
pub fn generate_button_css(project_json: &str, class_name: &str) -> Result<String, JsError> {
    let project = Project::from_json(project_json).map_err(js_err)?;
    project.generate_button_css(class_name).map_err(js_err)
}

/// Validate a settings JSON object before it is applied.
///
/// Returns an empty string when the settings are usable, or the error message.
#[wasm_bindgen]
pub fn validate_settings(settings_json: &str) -> String {
    let result = serde_json::from_str::<Settings>(settings_json)
        .map_err(|e| e.to_string())
        .and_then(|s| s.validate().map_err(|e| e.to_string()));
    match result {
        Ok(()) => String::new(),
        Err(msg) => msg,
    }
}
