use super::ArgValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One function invocation in an expression chain.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionNode {
    #[serde(rename = "type")]
    ty: NodeType,

    /// Name of the invoked function
    pub function: String,

    /// Named arguments, in declaration order
    #[serde(default)]
    pub arguments: IndexMap<String, Vec<ArgValue>>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NodeType {
    #[default]
    Function,
}

impl FunctionNode {
    /// An invocation of `function` with no arguments.
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            ty: NodeType::Function,
            function: function.into(),
            arguments: IndexMap::new(),
        }
    }

    /// Appends `value` to the values of argument `name`.
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.arguments
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    pub fn arg(&self, name: &str) -> Option<&[ArgValue]> {
        self.arguments.get(name).map(Vec::as_slice)
    }
}
