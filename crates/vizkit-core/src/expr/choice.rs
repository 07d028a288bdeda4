use serde::{Deserialize, Serialize};

/// One selectable entry of a choice list.
///
/// `value` identifies the entry and must be unique within its list; `name` is
/// the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    pub name: String,
    pub value: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
