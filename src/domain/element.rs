//! Widget kinds and their synchronized state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven widget kinds the protocol knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    Text,
    Input,
    Checkbox,
    Slider,
    Radio,
    Number,
}

impl WidgetKind {
    /// Wire-level name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Button => "button",
            WidgetKind::Text => "text",
            WidgetKind::Input => "input",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::Slider => "slider",
            WidgetKind::Radio => "radio",
            WidgetKind::Number => "number",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind-specific widget state as carried by `init` and `update` messages.
///
/// Tagged by `kind` on the wire. The server may include extra fields
/// (notably the element's own `id`); they are ignored here since the
/// envelope already addresses the target widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementState {
    /// Clickable button label.
    Button { text: String },

    /// Read-only text content.
    Text { text: String },

    /// Free-form text input value.
    Input { value: String },

    /// Checkbox checked state.
    Checkbox { checked: bool },

    /// Range slider. `min` and `max` are always present; `step` is optional.
    Slider {
        value: f64,
        min: f64,
        max: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },

    /// Radio button. Radios sharing a `name` are mutually exclusive;
    /// `value` is what the group reports when this radio is selected.
    Radio {
        checked: bool,
        name: String,
        value: String,
    },

    /// Numeric input. Bounds and step are all optional.
    Number {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
}

impl ElementState {
    /// The kind this state belongs to.
    pub fn kind(&self) -> WidgetKind {
        match self {
            ElementState::Button { .. } => WidgetKind::Button,
            ElementState::Text { .. } => WidgetKind::Text,
            ElementState::Input { .. } => WidgetKind::Input,
            ElementState::Checkbox { .. } => WidgetKind::Checkbox,
            ElementState::Slider { .. } => WidgetKind::Slider,
            ElementState::Radio { .. } => WidgetKind::Radio,
            ElementState::Number { .. } => WidgetKind::Number,
        }
    }
}
