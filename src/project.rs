//! The saved project document: settings, button classes and project colors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::button::{default_colors, known_states, ButtonSet, StateColors};
use crate::css;
use crate::error::{ForgeError, Result};
use crate::scale::{limits, Property};
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub settings: Settings,
    pub class_sizes: ButtonSet,
    #[serde(deserialize_with = "known_states")]
    pub colors: StateColors,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            class_sizes: ButtonSet::with_defaults(),
            colors: default_colors(),
        }
    }
}

impl Project {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate everything CSS generation depends on.
    ///
    /// Returns non-fatal warnings: out-of-range settings and property values
    /// outside what the editor inputs accept.
    pub fn check(&self) -> Result<Vec<String>> {
        self.settings.validate()?;

        let mut seen = HashSet::new();
        for button in &self.class_sizes {
            if button.class_name.trim().is_empty() {
                return Err(ForgeError::EmptyClassName);
            }
            if !seen.insert(button.class_name.as_str()) {
                return Err(ForgeError::DuplicateClassName(button.class_name.clone()));
            }
        }

        let mut warnings = self.settings.warnings();
        let unit = self.settings.unit_type;
        for button in &self.class_sizes {
            for property in Property::ALL {
                let Some(value) = button.value(property) else {
                    warnings.push(format!(
                        ".{}: {property} has no value, base sizes will be used",
                        button.class_name
                    ));
                    continue;
                };
                let range = limits(property, unit);
                if value < range.min || value > range.max {
                    warnings.push(format!(
                        ".{}: {property} {value} is outside {}..={} for {unit}",
                        button.class_name, range.min, range.max
                    ));
                }
            }
        }
        Ok(warnings)
    }

    /// Stylesheet for every button class.
    pub fn generate_css(&self) -> Result<String> {
        css::generate_classes_css(self.class_sizes.as_slice(), &self.settings, &self.colors)
    }

    /// Stylesheet for the button named `class_name`.
    pub fn generate_button_css(&self, class_name: &str) -> Result<String> {
        let button = self
            .class_sizes
            .find_by_name(class_name)
            .ok_or_else(|| ForgeError::UnknownClassName(class_name.to_string()))?;
        css::generate_single_button_css(button, &self.settings, &self.colors)
    }
}
