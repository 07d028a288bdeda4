use super::{ArgSlot, ArgValue, FunctionNode};
use serde::{Deserialize, Serialize};

/// An expression: a chain of function invocations.
///
/// Updates never happen in place. [`Ast::set`] returns a new tree with one
/// value replaced and leaves `self` untouched.
///
/// Serialized as `{"type": "expression", "chain": [..]}`. Any other `type`
/// is rejected when deserializing.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ast {
    #[serde(rename = "type")]
    ty: ExprType,

    pub chain: Vec<FunctionNode>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ExprType {
    #[default]
    Expression,
}

impl Ast {
    pub fn new(chain: Vec<FunctionNode>) -> Self {
        Self {
            ty: ExprType::Expression,
            chain,
        }
    }

    /// A single invocation of `function` with no arguments.
    pub fn function(function: impl Into<String>) -> Self {
        Self::new(vec![FunctionNode::new(function)])
    }

    /// Returns the value at `slot`, or `None` if any step of the path is
    /// missing.
    pub fn get(&self, slot: &ArgSlot) -> Option<&ArgValue> {
        self.chain
            .get(slot.node)?
            .arguments
            .get(&slot.name)?
            .get(slot.index)
    }

    /// Shorthand for the active value of `name` on the first function.
    pub fn first_arg(&self, name: &str) -> Option<&ArgValue> {
        self.get(&ArgSlot::first(name))
    }

    /// Returns a copy of this tree with the value at `slot` replaced.
    ///
    /// Missing steps are created on the way: chain nodes as unnamed functions
    /// and earlier value positions as `null`.
    #[must_use]
    pub fn set(&self, slot: &ArgSlot, value: impl Into<ArgValue>) -> Ast {
        let mut ret = self.clone();
        ret.set_in_place(slot, value.into());
        ret
    }

    fn set_in_place(&mut self, slot: &ArgSlot, value: ArgValue) {
        if self.chain.len() <= slot.node {
            self.chain.resize_with(slot.node + 1, FunctionNode::default);
        }

        let values = self.chain[slot.node]
            .arguments
            .entry(slot.name.clone())
            .or_default();

        if values.len() <= slot.index {
            values.resize(slot.index + 1, ArgValue::Null);
        }

        values[slot.index] = value;
    }
}
