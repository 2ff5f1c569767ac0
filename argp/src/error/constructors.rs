//! Constructors and classification helpers for `ArgpError`.

use super::{ArgpError, HandlerError};

impl ArgpError {
    /// Wraps an error returned by a command handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp::ArgpError;
    /// let err = ArgpError::handler(std::io::Error::other("disk full"));
    /// assert_eq!(err.to_string(), "disk full");
    /// ```
    #[must_use]
    pub fn handler<E>(source: E) -> Self
    where
        E: Into<HandlerError>,
    {
        Self::Handler(source.into())
    }

    pub(crate) fn parse(command: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            command: command.to_owned(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed_tag(tag: &str, reason: &'static str) -> Self {
        Self::MalformedTag {
            tag: tag.to_owned(),
            reason,
        }
    }

    /// Returns `true` when the error is a request to display help.
    ///
    /// Entry points running with [`crate::ParseErrorPolicy::ReturnError`] use
    /// this to print the help text and exit successfully instead of reporting
    /// a failure.
    #[must_use]
    pub const fn is_display_request(&self) -> bool {
        matches!(self, Self::HelpRequested { .. })
    }

    /// Returns `true` for errors caused by how an options type is declared
    /// rather than by user input.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedType { .. }
                | Self::MalformedTag { .. }
                | Self::DuplicateFlag { .. }
                | Self::FieldIndex { .. }
        )
    }

    /// Status the process should exit with when this error ends the program.
    ///
    /// Help requests exit with `0`, everything else with `2`, the conventional
    /// status for usage errors.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.is_display_request() { 0 } else { 2 }
    }

    /// Returns the handler's error when this value wraps one.
    #[must_use]
    pub fn as_handler_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Handler(source) => Some(source.as_ref()),
            _ => None,
        }
    }
}
