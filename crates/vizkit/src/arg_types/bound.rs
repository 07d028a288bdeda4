use crate::{ArgValue, Ast};

use std::borrow::Cow;

/// An argument value as seen by an expression-typed editor.
///
/// The boolean `false` turns the feature off. Anything else is edited as a
/// tree: an expression is used as is, and any other value stands in for the
/// default expression, so every argument reads back as its fallback until
/// written.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound<'a> {
    Disabled,
    Tree(Cow<'a, Ast>),
}

impl<'a> Bound<'a> {
    pub fn new(value: &'a ArgValue, default: impl FnOnce() -> Ast) -> Self {
        match value {
            ArgValue::Bool(false) => Bound::Disabled,
            ArgValue::Ast(ast) => Bound::Tree(Cow::Borrowed(ast)),
            _ => Bound::Tree(Cow::Owned(default())),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Bound::Disabled)
    }

    pub fn as_ast(&self) -> Option<&Ast> {
        match self {
            Bound::Disabled => None,
            Bound::Tree(ast) => Some(&**ast),
        }
    }
}
