pub mod expr;
pub use expr::Ast;

mod error;
pub use error::{Error, IntoError};

pub mod transport;
pub use transport::Transport;

/// A Result type alias that uses vizkit's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
