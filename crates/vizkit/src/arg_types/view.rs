//! Render models produced by editors.
//!
//! These describe what to show, not how to draw it. A front end maps each
//! variant onto its own widgets.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// The argument is turned off; only a notice is shown.
    Disabled {
        class_name: &'static str,
        message: &'static str,
    },

    /// A container holding the controls of an enabled argument.
    Configure {
        class_name: &'static str,
        control: SelectControl,
    },

    /// A bare dropdown.
    Select(SelectControl),
}

impl View {
    pub fn is_disabled(&self) -> bool {
        matches!(self, View::Disabled { .. })
    }

    /// The dropdown inside this view, if any.
    pub fn select_control(&self) -> Option<&SelectControl> {
        match self {
            View::Disabled { .. } => None,
            View::Configure { control, .. } | View::Select(control) => Some(control),
        }
    }
}

/// A dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectControl {
    pub class_name: Option<&'static str>,
    pub label: Option<&'static str>,
    pub selected: Selection,
    pub options: Vec<SelectOption>,
}

/// What a dropdown shows as selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Selection {
    /// Nothing selected. Distinct from every real option value.
    Placeholder,
    Value(String),
}

impl Selection {
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Selection::Placeholder => None,
            Selection::Value(value) => Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectOption {
    /// The "nothing selected" entry. Shown but never pickable.
    Placeholder {
        label: &'static str,
    },
    Choice {
        value: String,
        label: String,
    },
}

impl SelectOption {
    pub fn choice(value: impl Into<String>, label: impl Into<String>) -> Self {
        SelectOption::Choice {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, SelectOption::Placeholder { .. })
    }
}
