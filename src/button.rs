//! Button class definitions and the editable working set.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{ForgeError, Result};
use crate::scale::Property;
use crate::units::{convert_stored, Unit};

pub const FALLBACK_BACKGROUND: &str = "var(--clr-accent)";
pub const FALLBACK_TEXT: &str = "var(--clr-btn-txt)";
pub const FALLBACK_BORDER: &str = "var(--clr-btn-bdr)";

// ── States and colors ──────────────────────────────────────────────────

/// Interaction state a button can style separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonState {
    Normal,
    Hover,
    Active,
    Disabled,
}

impl ButtonState {
    pub const ALL: [ButtonState; 4] = [
        ButtonState::Normal,
        ButtonState::Hover,
        ButtonState::Active,
        ButtonState::Disabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonState::Normal => "normal",
            ButtonState::Hover => "hover",
            ButtonState::Active => "active",
            ButtonState::Disabled => "disabled",
        }
    }

    /// Pseudo-class appended to the selector; `None` for the base state.
    pub fn pseudo_class(self) -> Option<&'static str> {
        match self {
            ButtonState::Normal => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonState {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ButtonState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| format!("unknown button state '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default)]
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundSpec {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
}

/// A stored background: a plain color or a solid/gradient spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Background {
    Color(String),
    Spec(BackgroundSpec),
}

/// Colors for one state as stored. Older data used `background1` for the
/// first gradient color instead of a `background` object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_border: Option<bool>,
}

/// Colors for one state, reduced to what generated CSS can express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColors {
    pub background: String,
    pub text: String,
    pub border: String,
    pub use_border: bool,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl ColorState {
    pub fn simple(background: &str, text: &str, border: &str) -> Self {
        Self {
            background: Some(Background::Color(background.to_string())),
            background1: None,
            text: Some(text.to_string()),
            border: Some(border.to_string()),
            use_border: Some(true),
        }
    }

    /// Gradients collapse to their solid color, or else their first stop.
    pub fn resolve(&self) -> ResolvedColors {
        let background = match &self.background {
            Some(Background::Spec(spec)) => non_empty(spec.solid.as_deref())
                .or_else(|| {
                    spec.gradient
                        .as_ref()
                        .and_then(|g| g.stops.first())
                        .and_then(|stop| non_empty(Some(stop.color.as_str())))
                })
                .unwrap_or(FALLBACK_BACKGROUND),
            other => non_empty(self.background1.as_deref())
                .or_else(|| match other {
                    Some(Background::Color(c)) => non_empty(Some(c.as_str())),
                    _ => None,
                })
                .unwrap_or(FALLBACK_BACKGROUND),
        };

        ResolvedColors {
            background: background.to_string(),
            text: non_empty(self.text.as_deref()).unwrap_or(FALLBACK_TEXT).to_string(),
            border: non_empty(self.border.as_deref()).unwrap_or(FALLBACK_BORDER).to_string(),
            use_border: self.use_border != Some(false),
        }
    }
}

/// Per-state colors, iterated in state order.
pub type StateColors = BTreeMap<ButtonState, ColorState>;

/// Read a stored state map, skipping states that have no selector here.
pub fn known_states<'de, D>(deserializer: D) -> std::result::Result<StateColors, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    let mut colors = StateColors::new();
    for (key, value) in raw {
        match key.parse::<ButtonState>() {
            Ok(state) => {
                let color =
                    ColorState::deserialize(value).map_err(<D::Error as de::Error>::custom)?;
                colors.insert(state, color);
            }
            Err(_) => tracing::warn!(state = %key, "ignoring colors for unknown button state"),
        }
    }
    Ok(colors)
}

fn known_states_opt<'de, D>(deserializer: D) -> std::result::Result<Option<StateColors>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Known(#[serde(deserialize_with = "known_states")] StateColors);

    Ok(Option::<Known>::deserialize(deserializer)?.map(|Known(colors)| colors))
}

pub fn resolve_colors(colors: &StateColors) -> BTreeMap<ButtonState, ResolvedColors> {
    colors.iter().map(|(state, c)| (*state, c.resolve())).collect()
}

fn gradient_background(solid: &str, second: &str) -> Background {
    Background::Spec(BackgroundSpec {
        kind: Some("solid".to_string()),
        solid: Some(solid.to_string()),
        gradient: Some(Gradient {
            kind: Some("linear".to_string()),
            angle: Some(135.0),
            stops: vec![
                GradientStop {
                    color: solid.to_string(),
                    position: Some(0.0),
                },
                GradientStop {
                    color: second.to_string(),
                    position: Some(100.0),
                },
            ],
        }),
    })
}

/// Project-wide colors used by buttons without their own.
pub fn default_colors() -> StateColors {
    let mut active = ColorState::simple("", FALLBACK_TEXT, FALLBACK_BORDER);
    active.background = Some(gradient_background(
        "var(--clr-btn-active)",
        "var(--clr-btn-active-gradient)",
    ));
    let mut disabled = ColorState::simple("", "var(--clr-gray-600)", "var(--clr-gray-400)");
    disabled.background = Some(gradient_background(
        "var(--clr-gray-300)",
        "var(--clr-gray-400)",
    ));

    BTreeMap::from([
        (
            ButtonState::Normal,
            ColorState::simple(FALLBACK_BACKGROUND, FALLBACK_TEXT, FALLBACK_BORDER),
        ),
        (
            ButtonState::Hover,
            ColorState::simple("var(--clr-btn-hover)", FALLBACK_TEXT, FALLBACK_BORDER),
        ),
        (ButtonState::Active, active),
        (ButtonState::Disabled, disabled),
    ])
}

/// Colors given to a freshly created button.
pub fn new_button_colors() -> StateColors {
    BTreeMap::from([
        (
            ButtonState::Normal,
            ColorState::simple(FALLBACK_BACKGROUND, FALLBACK_TEXT, FALLBACK_BORDER),
        ),
        (
            ButtonState::Hover,
            ColorState::simple("var(--clr-btn-hover)", FALLBACK_TEXT, FALLBACK_BORDER),
        ),
        (
            ButtonState::Active,
            ColorState::simple("var(--clr-secondary)", FALLBACK_TEXT, FALLBACK_BORDER),
        ),
        (
            ButtonState::Disabled,
            ColorState::simple(
                "var(--jimr-gray-300)",
                "var(--jimr-gray-600)",
                "var(--jimr-gray-500)",
            ),
        ),
    ])
}

// ── Button classes ─────────────────────────────────────────────────────

/// Accept numbers, numeric strings, or anything else as "no value".
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// One button definition. Numeric fields hold the size at the max viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonClass {
    pub id: u32,
    pub class_name: String,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(
        default,
        deserialize_with = "known_states_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub colors: Option<StateColors>,
}

impl ButtonClass {
    /// A button with every property set, in pixels.
    #[allow(clippy::too_many_arguments)]
    pub fn sized(
        id: u32,
        class_name: &str,
        width: f64,
        height: f64,
        padding_x: f64,
        padding_y: f64,
        font_size: f64,
        border_radius: f64,
        border_width: f64,
    ) -> Self {
        Self {
            id,
            class_name: class_name.to_string(),
            width: Some(width),
            height: Some(height),
            padding_x: Some(padding_x),
            padding_y: Some(padding_y),
            font_size: Some(font_size),
            border_radius: Some(border_radius),
            border_width: Some(border_width),
            colors: None,
        }
    }

    /// Defaults for a newly created button, with dimensions in `unit`.
    pub fn with_defaults(id: u32, class_name: &str, unit: Unit) -> Self {
        let mut button = match unit {
            Unit::Px => Self::sized(id, class_name, 160.0, 40.0, 16.0, 8.0, 16.0, 6.0, 2.0),
            Unit::Rem => Self::sized(id, class_name, 10.0, 2.5, 1.0, 0.5, 16.0, 6.0, 2.0),
        };
        button.colors = Some(new_button_colors());
        button
    }

    pub fn value(&self, property: Property) -> Option<f64> {
        match property {
            Property::Width => self.width,
            Property::Height => self.height,
            Property::PaddingX => self.padding_x,
            Property::PaddingY => self.padding_y,
            Property::FontSize => self.font_size,
            Property::BorderRadius => self.border_radius,
            Property::BorderWidth => self.border_width,
        }
    }

    pub fn set_value(&mut self, property: Property, value: Option<f64>) {
        let slot = match property {
            Property::Width => &mut self.width,
            Property::Height => &mut self.height,
            Property::PaddingX => &mut self.padding_x,
            Property::PaddingY => &mut self.padding_y,
            Property::FontSize => &mut self.font_size,
            Property::BorderRadius => &mut self.border_radius,
            Property::BorderWidth => &mut self.border_width,
        };
        *slot = value;
    }

    pub fn has_border(&self) -> bool {
        self.border_width.is_some_and(|w| w > 0.0)
    }
}

/// The three classes a new project starts with.
pub fn default_classes() -> Vec<ButtonClass> {
    vec![
        ButtonClass::sized(1, "btn-sm", 120.0, 32.0, 12.0, 6.0, 14.0, 4.0, 1.0),
        ButtonClass::sized(2, "btn-md", 160.0, 40.0, 16.0, 8.0, 16.0, 6.0, 2.0),
        ButtonClass::sized(3, "btn-lg", 200.0, 48.0, 20.0, 10.0, 18.0, 8.0, 2.0),
    ]
}

/// Next free name of the form `<base>-copy`, `<base>-copy-2`, ...
///
/// An existing `-copy` / `-copy-N` suffix on `original` is replaced, not stacked.
pub fn duplicate_name(original: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let base = strip_copy_suffix(original);
    let mut candidate = format!("{base}-copy");
    let mut counter = 1;
    while is_taken(&candidate) {
        counter += 1;
        candidate = format!("{base}-copy-{counter}");
    }
    candidate
}

fn strip_copy_suffix(name: &str) -> &str {
    if let Some(base) = name.strip_suffix("-copy") {
        return base;
    }
    if let Some(idx) = name.rfind("-copy-") {
        let digits = &name[idx + "-copy-".len()..];
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return &name[..idx];
        }
    }
    name
}

// ── Working set ────────────────────────────────────────────────────────

/// The editable list of button classes. Class names are unique.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonSet {
    classes: Vec<ButtonClass>,
}

impl ButtonSet {
    pub fn new(classes: Vec<ButtonClass>) -> Self {
        Self { classes }
    }

    pub fn with_defaults() -> Self {
        Self::new(default_classes())
    }

    pub fn as_slice(&self) -> &[ButtonClass] {
        &self.classes
    }

    pub fn iter(&self) -> impl Iterator<Item = &ButtonClass> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ButtonClass> {
        self.classes.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut ButtonClass> {
        self.classes.iter_mut().find(|b| b.id == id)
    }

    pub fn find_by_name(&self, class_name: &str) -> Option<&ButtonClass> {
        self.classes.iter().find(|b| b.class_name == class_name)
    }

    pub fn contains_name(&self, class_name: &str) -> bool {
        self.find_by_name(class_name).is_some()
    }

    fn next_id(&self) -> Result<u32> {
        match self.classes.iter().map(|b| b.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(ForgeError::IdSpaceExhausted),
        }
    }

    fn check_name(&self, class_name: &str, except: Option<u32>) -> Result<String> {
        let name = class_name.trim();
        if name.is_empty() {
            return Err(ForgeError::EmptyClassName);
        }
        let taken = self
            .classes
            .iter()
            .any(|b| b.class_name == name && Some(b.id) != except);
        if taken {
            return Err(ForgeError::DuplicateClassName(name.to_string()));
        }
        Ok(name.to_string())
    }

    /// Add a button with default sizes and colors. Returns its id.
    pub fn create(&mut self, class_name: &str, unit: Unit) -> Result<u32> {
        let name = self.check_name(class_name, None)?;
        let id = self.next_id()?;
        self.classes.push(ButtonClass::with_defaults(id, &name, unit));
        tracing::debug!(id, name = %name, "created button class");
        Ok(id)
    }

    /// Deep-copy a button under a fresh id and `-copy` name. Returns the new id.
    pub fn duplicate(&mut self, id: u32) -> Result<u32> {
        let original = self.get(id).ok_or(ForgeError::UnknownButton(id))?;
        let mut copy = original.clone();
        copy.id = self.next_id()?;
        copy.class_name = duplicate_name(&original.class_name, |n| self.contains_name(n));
        tracing::debug!(
            from = %original.class_name,
            to = %copy.class_name,
            "duplicated button class"
        );
        let new_id = copy.id;
        self.classes.push(copy);
        Ok(new_id)
    }

    pub fn rename(&mut self, id: u32, class_name: &str) -> Result<()> {
        let name = self.check_name(class_name, Some(id))?;
        let button = self.get_mut(id).ok_or(ForgeError::UnknownButton(id))?;
        button.class_name = name;
        Ok(())
    }

    pub fn delete(&mut self, id: u32) -> Result<ButtonClass> {
        let idx = self
            .classes
            .iter()
            .position(|b| b.id == id)
            .ok_or(ForgeError::UnknownButton(id))?;
        Ok(self.classes.remove(idx))
    }

    pub fn restore_defaults(&mut self) {
        self.classes = default_classes();
    }

    /// Re-express every stored dimensional value after a unit switch.
    pub fn convert_units(&mut self, from: Unit, to: Unit) {
        if from == to {
            return;
        }
        for button in &mut self.classes {
            for property in Property::ALL.into_iter().filter(|p| p.is_dimensional()) {
                if let Some(v) = button.value(property) {
                    button.set_value(property, Some(convert_stored(v, from, to)));
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a ButtonSet {
    type Item = &'a ButtonClass;
    type IntoIter = std::slice::Iter<'a, ButtonClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_count_up() {
        let taken = ["btn-md", "btn-md-copy", "btn-md-copy-2"];
        let is_taken = |n: &str| taken.contains(&n);
        assert_eq!(duplicate_name("btn-md", is_taken), "btn-md-copy-3");
        assert_eq!(duplicate_name("btn-md-copy-2", is_taken), "btn-md-copy-3");
        assert_eq!(duplicate_name("btn-lg", is_taken), "btn-lg-copy");
        assert_eq!(duplicate_name("btn-lg-copy", |_| false), "btn-lg-copy");
    }

    #[test]
    fn copy_suffix_needs_digits() {
        assert_eq!(strip_copy_suffix("btn-copy-x"), "btn-copy-x");
        assert_eq!(strip_copy_suffix("btn-copy-"), "btn-copy-");
        assert_eq!(strip_copy_suffix("btn-copy-12"), "btn");
    }

    #[test]
    fn create_assigns_next_id_and_rejects_duplicates() {
        let mut set = ButtonSet::with_defaults();
        let id = set.create("  btn-xl ", Unit::Px).unwrap();
        assert_eq!(id, 4);
        let created = set.get(id).unwrap();
        assert_eq!(created.class_name, "btn-xl");
        assert_eq!(created.width, Some(160.0));
        assert!(created.colors.is_some());

        assert!(matches!(
            set.create("btn-md", Unit::Px),
            Err(ForgeError::DuplicateClassName(_))
        ));
        assert!(matches!(set.create("   ", Unit::Px), Err(ForgeError::EmptyClassName)));
    }

    #[test]
    fn create_in_rem_uses_rem_dimensions() {
        let mut set = ButtonSet::default();
        let id = set.create("cta", Unit::Rem).unwrap();
        assert_eq!(id, 1);
        let b = set.get(id).unwrap();
        assert_eq!(
            (b.width, b.height, b.padding_x, b.padding_y),
            (Some(10.0), Some(2.5), Some(1.0), Some(0.5))
        );
        assert_eq!(b.font_size, Some(16.0));
    }

    #[test]
    fn duplicate_deep_copies_under_new_id() {
        let mut set = ButtonSet::with_defaults();
        let id = set.duplicate(2).unwrap();
        let copy = set.get(id).unwrap().clone();
        assert_eq!(copy.id, 4);
        assert_eq!(copy.class_name, "btn-md-copy");
        assert_eq!(copy.width, Some(160.0));

        set.get_mut(id).unwrap().width = Some(999.0);
        assert_eq!(set.get(2).unwrap().width, Some(160.0));

        let again = set.duplicate(2).unwrap();
        assert_eq!(set.get(again).unwrap().class_name, "btn-md-copy-2");
        assert!(matches!(set.duplicate(42), Err(ForgeError::UnknownButton(42))));
    }

    #[test]
    fn rename_allows_own_name() {
        let mut set = ButtonSet::with_defaults();
        set.rename(1, "btn-sm").unwrap();
        set.rename(1, "btn-small").unwrap();
        assert_eq!(set.get(1).unwrap().class_name, "btn-small");
        assert!(set.rename(1, "btn-lg").is_err());
        assert!(matches!(set.rename(9, "x"), Err(ForgeError::UnknownButton(9))));
    }

    #[test]
    fn delete_and_restore() {
        let mut set = ButtonSet::with_defaults();
        let removed = set.delete(3).unwrap();
        assert_eq!(removed.class_name, "btn-lg");
        assert_eq!(set.len(), 2);
        assert!(set.delete(3).is_err());
        set.restore_defaults();
        assert_eq!(set, ButtonSet::with_defaults());
    }

    #[test]
    fn unit_switch_converts_dimensions_only() {
        let mut set = ButtonSet::with_defaults();
        set.convert_units(Unit::Px, Unit::Rem);
        let md = set.get(2).unwrap();
        assert_eq!(md.width, Some(10.0));
        assert_eq!(md.padding_y, Some(0.5));
        assert_eq!(md.font_size, Some(16.0));
        assert_eq!(md.border_width, Some(2.0));

        set.convert_units(Unit::Rem, Unit::Px);
        assert_eq!(set, ButtonSet::with_defaults());
    }

    #[test]
    fn colors_resolve_all_stored_shapes() {
        let colors = default_colors();
        let resolved = resolve_colors(&colors);
        assert_eq!(resolved[&ButtonState::Normal].background, "var(--clr-accent)");
        assert_eq!(resolved[&ButtonState::Active].background, "var(--clr-btn-active)");
        assert_eq!(resolved[&ButtonState::Disabled].text, "var(--clr-gray-600)");

        let legacy = ColorState {
            background1: Some("#ff0000".into()),
            ..ColorState::default()
        };
        let r = legacy.resolve();
        assert_eq!(r.background, "#ff0000");
        assert_eq!(r.text, FALLBACK_TEXT);
        assert_eq!(r.border, FALLBACK_BORDER);
        assert!(r.use_border);

        let gradient_only = ColorState {
            background: Some(Background::Spec(BackgroundSpec {
                kind: Some("gradient".into()),
                solid: None,
                gradient: Some(Gradient {
                    kind: None,
                    angle: None,
                    stops: vec![GradientStop {
                        color: "#123456".into(),
                        position: None,
                    }],
                }),
            })),
            use_border: Some(false),
            ..ColorState::default()
        };
        let r = gradient_only.resolve();
        assert_eq!(r.background, "#123456");
        assert!(!r.use_border);

        assert_eq!(ColorState::default().resolve().background, FALLBACK_BACKGROUND);
    }

    #[test]
    fn stored_colors_parse_from_json() {
        let json = r##"{
            "normal": {"background": "#111", "text": "#fff", "border": "#000", "useBorder": true},
            "active": {"background": {"type": "solid", "solid": "#222"}, "text": "#eee"}
        }"##;
        let colors: StateColors = serde_json::from_str(json).unwrap();
        let resolved = resolve_colors(&colors);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[&ButtonState::Active].background, "#222");
        assert_eq!(
            colors.keys().copied().collect::<Vec<_>>(),
            vec![ButtonState::Normal, ButtonState::Active]
        );
    }

    #[test]
    fn numeric_fields_are_lenient() {
        let json = r#"{
            "id": 7, "className": "x", "width": "120", "height": null,
            "paddingX": "wide", "fontSize": 14
        }"#;
        let b: ButtonClass = serde_json::from_str(json).unwrap();
        assert_eq!(b.width, Some(120.0));
        assert_eq!(b.height, None);
        assert_eq!(b.padding_x, None);
        assert_eq!(b.padding_y, None);
        assert_eq!(b.font_size, Some(14.0));
        assert!(!b.has_border());
    }

    #[test]
    fn ids_run_out_instead_of_wrapping() {
        let mut last = default_classes().remove(1);
        last.id = u32::MAX;
        let mut set = ButtonSet::new(vec![last]);
        assert!(matches!(set.create("b", Unit::Px), Err(ForgeError::IdSpaceExhausted)));
        assert!(matches!(set.duplicate(u32::MAX), Err(ForgeError::IdSpaceExhausted)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unknown_states_are_skipped() {
        let json = r##"{
            "id": 3, "className": "cta",
            "colors": {
                "normal": {"background": "#0af"},
                "focus": {"background": "#f00"},
                "hover": {"background": "#08c"}
            }
        }"##;
        let b: ButtonClass = serde_json::from_str(json).unwrap();
        let colors = b.colors.expect("known states kept");
        assert_eq!(
            colors.keys().copied().collect::<Vec<_>>(),
            vec![ButtonState::Normal, ButtonState::Hover]
        );

        let b: ButtonClass =
            serde_json::from_str(r#"{"id": 1, "className": "x", "colors": null}"#).unwrap();
        assert_eq!(b.colors, None);

        let bad = r#"{"id": 1, "className": "x", "colors": {"normal": {"text": 5}}}"#;
        assert!(serde_json::from_str::<ButtonClass>(bad).is_err());
    }

    #[test]
    fn states_parse_from_their_names() {
        for state in ButtonState::ALL {
            assert_eq!(state.as_str().parse::<ButtonState>(), Ok(state));
        }
        assert!("focus".parse::<ButtonState>().is_err());
    }
}
