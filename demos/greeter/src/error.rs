//! Error types for the `greeter` demo.
//!
//! Handlers return [`GreeterError`]; `argp` passes it through unchanged, so
//! `main` can report it without knowing which command failed.

use std::io;

use thiserror::Error;

/// Errors raised by the greeter commands.
#[derive(Debug, Error)]
pub enum GreeterError {
    /// The root command was run without selecting a sub-command.
    #[error("no command given; expected one of: {0}")]
    MissingCommand(String),
    /// The options describe a greeting that cannot be rendered.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Problems with the greeting options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The recipient collapsed to nothing after trimming.
    #[error("recipient must contain visible characters")]
    BlankRecipient,
    /// The salutation collapsed to nothing after trimming.
    #[error("salutation must contain visible characters")]
    BlankSalutation,
    /// A greeting repeated zero times says nothing.
    #[error("repeat must be greater than zero")]
    ZeroRepeat,
}
