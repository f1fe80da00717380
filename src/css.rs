//! CSS assembly: one geometry rule plus one rule per state for each button.

use crate::button::{resolve_colors, ButtonClass, StateColors};
use crate::clamp::fluid_value_from_px;
use crate::error::Result;
use crate::scale::{scale, Property};
use crate::settings::Settings;

/// Whether a button with no border still gets a `border-width` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderWidthPolicy {
    /// Every property is declared.
    Always,
    /// `border-width` is left out when the stored width is not positive.
    OmitWhenZero,
}

/// The fluid geometry rule for one button.
///
/// `settings` must already be validated; this still returns its errors
/// rather than emitting `NaN`.
pub fn class_rule(
    button: &ButtonClass,
    settings: &Settings,
    policy: BorderWidthPolicy,
) -> Result<String> {
    let viewport = settings.viewport()?;
    let base = settings.base_sizes();
    let unit = settings.unit_type;

    let mut css = format!(".{} {{\n", button.class_name);
    for property in Property::ALL {
        if property == Property::BorderWidth
            && policy == BorderWidthPolicy::OmitWhenZero
            && !button.has_border()
        {
            continue;
        }

        let range = scale(button.value(property), unit, property, &base)?;
        let value = fluid_value_from_px(range.min, range.max, &viewport, unit)?;
        tracing::trace!(
            class = %button.class_name,
            %property,
            min = range.min,
            max = range.max,
            %value
        );

        for name in property.css_names() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
    }
    css.push_str("}\n\n");
    Ok(css)
}

/// Color rules for every state the button (or the project) defines.
///
/// Backgrounds are always solid; a border is drawn only when the state asks
/// for one and the button has a positive border width.
pub fn state_rules(button: &ButtonClass, global_colors: &StateColors) -> String {
    let colors = button.colors.as_ref().unwrap_or(global_colors);
    let has_border = button.has_border();

    let mut css = String::new();
    for (state, c) in resolve_colors(colors) {
        let selector = match state.pseudo_class() {
            Some(pseudo) => format!(".{}:{pseudo}", button.class_name),
            None => format!(".{}", button.class_name),
        };

        css.push_str(&format!("{selector} {{\n"));
        css.push_str(&format!("  background: {};\n", c.background));
        css.push_str(&format!("  color: {};\n", c.text));
        if c.use_border && has_border {
            css.push_str(&format!("  border-color: {};\n", c.border));
            css.push_str("  border-style: solid;\n");
        } else {
            css.push_str("  border: none;\n");
        }
        css.push_str("}\n\n");
    }
    css
}

/// Stylesheet for every button class.
///
/// Each button's state rules come before its geometry rule, and
/// `border-width` is always declared.
pub fn generate_classes_css(
    buttons: &[ButtonClass],
    settings: &Settings,
    global_colors: &StateColors,
) -> Result<String> {
    settings.validate()?;

    let mut css = String::new();
    for button in buttons {
        let class_css = class_rule(button, settings, BorderWidthPolicy::Always)?;
        css.push_str(&state_rules(button, global_colors));
        css.push_str(&class_css);
    }
    tracing::debug!(buttons = buttons.len(), bytes = css.len(), "generated class css");
    Ok(css.trim().to_string())
}

/// Stylesheet for a single button: geometry rule first, then state rules,
/// with `border-width` left out for borderless buttons.
pub fn generate_single_button_css(
    button: &ButtonClass,
    settings: &Settings,
    global_colors: &StateColors,
) -> Result<String> {
    settings.validate()?;

    let mut css = class_rule(button, settings, BorderWidthPolicy::OmitWhenZero)?;
    css.push_str(&state_rules(button, global_colors));
    Ok(css.trim().to_string())
}
