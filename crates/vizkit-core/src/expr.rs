//! The expression tree an editor reads from and writes to.
//!
//! An expression is a chain of function invocations. Each invocation holds
//! named arguments, and each argument holds an ordered list of values of which
//! the first is the active one.

mod arg_slot;
pub use arg_slot::ArgSlot;

mod arg_value;
pub use arg_value::ArgValue;

mod ast;
pub use ast::Ast;

mod choice;
pub use choice::Choice;

mod function_node;
pub use function_node::FunctionNode;
