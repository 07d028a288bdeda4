//! Editors bound to one argument of an expression function.
//!
//! An editor reads the current argument value, produces a [`View`] describing
//! the control to show, and turns user input into a replacement value for the
//! argument. Editors never mutate the value they are given.

mod axis_config;
pub use axis_config::{Axis, AxisConfig};

mod bound;
pub use bound::Bound;

mod registry;
pub use registry::{ArgTypeDef, ArgTypeRegistry, Template};

mod select;
pub use select::Select;

mod type_instance;
pub use type_instance::{ArgOptions, TypeInstance};

pub mod view;
pub use view::View;

use crate::{ArgValue, Ast};

use std::fmt::Debug;

/// A control editing one argument value.
pub trait ArgEditor: Debug + Send + Sync {
    /// Describes the control for the current `value`.
    fn render(&self, value: &ArgValue) -> View;

    /// Computes the replacement for `value` after the user entered `input`.
    ///
    /// Returns `None` when `input` is not something the control lets the user
    /// pick, in which case no change should be emitted.
    fn change(&self, value: &ArgValue, input: &str) -> Option<ArgValue>;

    /// Applies `input` and hands the replacement to `on_value_change`.
    ///
    /// Returns `true` if the callback was invoked.
    fn edit(
        &self,
        value: &ArgValue,
        input: &str,
        on_value_change: &mut dyn FnMut(ArgValue),
    ) -> bool {
        match self.change(value, input) {
            Some(next) => {
                on_value_change(next);
                true
            }
            None => false,
        }
    }
}

/// Returns the active value of argument `name` on the first function of the
/// bound tree, or `fallback` when the value is disabled or the path is missing.
pub fn read_argument(bound: &Bound<'_>, name: &str, fallback: impl Into<ArgValue>) -> ArgValue {
    match bound {
        Bound::Disabled => fallback.into(),
        Bound::Tree(ast) => match ast.first_arg(name) {
            Some(value) => value.clone(),
            None => fallback.into(),
        },
    }
}

/// Returns a new tree with the active value of argument `name` on the first
/// function replaced by `value`.
///
/// A disabled binding is first replaced by `default()`.
pub fn write_argument(
    bound: &Bound<'_>,
    name: &str,
    value: impl Into<ArgValue>,
    default: impl FnOnce() -> Ast,
) -> Ast {
    let slot = crate::ArgSlot::first(name);
    match bound {
        Bound::Disabled => default().set(&slot, value),
        Bound::Tree(ast) => ast.set(&slot, value),
    }
}
