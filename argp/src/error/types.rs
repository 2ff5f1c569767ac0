//! Primary error enum for binding and dispatch flows.

use thiserror::Error;

/// Boxed error returned by command handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while binding options or running commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArgpError {
    /// An options field has a type with no matching flag kind.
    #[error("unexpected option type {type_name} for field '{field}'")]
    UnsupportedType {
        /// Rust identifier of the offending field.
        field: String,
        /// Fully qualified name of the field's type.
        type_name: &'static str,
    },

    /// A field tag does not follow the `name` or `name,description` grammar.
    #[error("malformed option tag {tag:?}: {reason}")]
    MalformedTag {
        /// Tag text as written on the field.
        tag: String,
        /// Why the tag was rejected.
        reason: &'static str,
    },

    /// Two fields of one options type share a flag name.
    #[error("flag redefined: {name}")]
    DuplicateFlag {
        /// Flag name registered twice.
        name: String,
    },

    /// An options type was asked to store into a field it never reported.
    #[error("no option field at index {index}")]
    FieldIndex {
        /// Index passed to [`crate::Options::assign`].
        index: usize,
    },

    /// The command line could not be parsed against the registered flags.
    #[error("{message}")]
    Parse {
        /// Name of the command whose flags failed to parse.
        command: String,
        /// Conventional flag-parser diagnostic, e.g. `flag needs an argument: -i`.
        message: String,
    },

    /// `-h` or `-help` was given and no option claims that name.
    #[error("help requested for command '{command}'")]
    HelpRequested {
        /// Name of the command whose help was requested.
        command: String,
        /// Rendered help text for the command.
        help: String,
    },

    /// A sub-command with the same name is already registered.
    #[error("sub-command {name:?} for command {parent:?} has already been registered")]
    DuplicateSubCommand {
        /// Name of the command receiving the registration.
        parent: String,
        /// Name of the rejected sub-command.
        name: String,
    },

    /// Error returned by a command handler, passed through untouched.
    #[error(transparent)]
    Handler(HandlerError),
}
