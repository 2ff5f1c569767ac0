//! Greeting rendering for the `greeter` demo.

use crate::cli::{GlobalOptions, GreetOptions};
use crate::error::ValidationError;

/// Builds the greeting line from the global and `greet` options.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the recipient or salutation is blank,
/// or when `repeat` is zero.
///
/// # Examples
///
/// ```
/// use greeter::cli::{GlobalOptions, GreetOptions};
/// use greeter::message::greeting;
///
/// let globals = GlobalOptions::default();
/// let greet = GreetOptions::default();
/// assert_eq!(greeting(&globals, &greet)?, "Hello, World.");
/// # Ok::<(), greeter::error::ValidationError>(())
/// ```
pub fn greeting(globals: &GlobalOptions, greet: &GreetOptions) -> Result<String, ValidationError> {
    let recipient = globals.recipient.trim();
    if recipient.is_empty() {
        return Err(ValidationError::BlankRecipient);
    }
    let salutation = greet.salutation.trim();
    if salutation.is_empty() {
        return Err(ValidationError::BlankSalutation);
    }
    if greet.repeat == 0 {
        return Err(ValidationError::ZeroRepeat);
    }
    let punctuation = match (globals.quiet, greet.excited) {
        (true, _) => "",
        (false, true) => "!",
        (false, false) => ".",
    };
    let opening = vec![salutation; greet.repeat].join(" ");
    Ok(format!("{opening}, {recipient}{punctuation}"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::greeting;
    use crate::cli::{GlobalOptions, GreetOptions};
    use crate::error::ValidationError;

    fn global_opts(recipient: &str, quiet: bool) -> GlobalOptions {
        GlobalOptions {
            recipient: recipient.to_owned(),
            quiet,
        }
    }

    fn greet_opts(salutation: &str, repeat: usize, excited: bool) -> GreetOptions {
        GreetOptions {
            salutation: salutation.to_owned(),
            repeat,
            excited,
        }
    }

    #[rstest]
    #[case(global_opts("World", false), greet_opts("Hello", 1, false), "Hello, World.")]
    #[case(global_opts("Ada", false), greet_opts("Hi", 2, true), "Hi Hi, Ada!")]
    #[case(global_opts("  Ken ", true), greet_opts(" Hey ", 1, true), "Hey, Ken")]
    fn renders_greetings(
        #[case] globals: GlobalOptions,
        #[case] greet: GreetOptions,
        #[case] expected: &str,
    ) {
        assert_eq!(greeting(&globals, &greet).as_deref(), Ok(expected));
    }

    #[rstest]
    #[case(global_opts(" ", false), greet_opts("Hello", 1, false), ValidationError::BlankRecipient)]
    #[case(global_opts("World", false), greet_opts("", 1, false), ValidationError::BlankSalutation)]
    #[case(global_opts("World", false), greet_opts("Hello", 0, false), ValidationError::ZeroRepeat)]
    fn rejects_unrenderable_options(
        #[case] globals: GlobalOptions,
        #[case] greet: GreetOptions,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(greeting(&globals, &greet), Err(expected));
    }
}
