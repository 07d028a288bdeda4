pub mod arg_types;
pub use arg_types::{ArgEditor, ArgTypeRegistry};

pub mod index_patterns;
pub use index_patterns::IndexPatternsApiClient;

pub mod transport;

pub use vizkit_core::{
    err,
    expr::{self, ArgSlot, ArgValue, Ast, Choice, FunctionNode},
    Error, Result,
};
