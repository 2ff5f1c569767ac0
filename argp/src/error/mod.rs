//! Error types produced while binding flags and dispatching commands.

mod constructors;
mod types;

pub use types::{ArgpError, HandlerError};

/// Convenience alias for results carrying an [`ArgpError`].
pub type ArgpResult<T> = Result<T, ArgpError>;
