use super::{Ast, Choice};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single argument value.
///
/// Serialized untagged, so a value reads back as the first variant whose shape
/// matches: `null`, a boolean, a number, a string, a `{name, value}` choice or
/// a nested expression (an object with a `chain`).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Choice(Choice),
    Ast(Ast),
}

impl ArgValue {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_ast(&self) -> Option<&Ast> {
        match self {
            Self::Ast(ast) => Some(ast),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&Choice> {
        match self {
            Self::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    /// The string form used to compare a value against choice identifiers.
    ///
    /// A choice yields its `value`; scalars are stringified. A nested
    /// expression has no string form.
    pub fn to_identifier(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => Some(Cow::Borrowed("null")),
            Self::Bool(v) => Some(Cow::Borrowed(if *v { "true" } else { "false" })),
            Self::Number(v) => Some(Cow::Owned(v.to_string())),
            Self::String(v) => Some(Cow::Borrowed(v)),
            Self::Choice(choice) => Some(Cow::Borrowed(&choice.value)),
            Self::Ast(_) => None,
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Ast> for ArgValue {
    fn from(value: Ast) -> Self {
        Self::Ast(value)
    }
}

impl From<Choice> for ArgValue {
    fn from(value: Choice) -> Self {
        Self::Choice(value)
    }
}
