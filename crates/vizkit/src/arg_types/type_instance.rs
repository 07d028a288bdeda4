use crate::Choice;

use serde::{Deserialize, Serialize};

/// Describes the argument an editor is bound to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInstance {
    /// Argument name, e.g. `xaxis`
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default)]
    pub options: ArgOptions,
}

/// Editor-specific settings carried by a [`TypeInstance`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgOptions {
    /// Entries offered by a select editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
}

impl TypeInstance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_choices(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.options.choices = Some(choices.into_iter().collect());
        self
    }
}
