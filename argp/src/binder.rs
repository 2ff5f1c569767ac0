//! Binding command-line tokens onto an options value.
//!
//! Binding runs in two phases. [`parse_args`] builds a fresh [`FlagSet`]
//! from the options and parses the tokens without touching the options;
//! [`apply`] then stores every parsed value. Nothing is written unless the
//! whole token list parsed, so a failed parse leaves every field as it was.

use std::io::Write as _;

use tracing::{trace, warn};

use crate::{ArgpError, ArgpResult, FlagSet, Options, ParsedArgs};

/// What to do when the command line cannot be parsed or asks for help.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseErrorPolicy {
    /// Print the diagnostic and usage to stderr, then exit the process with
    /// status 2, or status 0 after printing help for `-h`/`-help`.
    #[default]
    Exit,
    /// Return [`ArgpError::Parse`] or [`ArgpError::HelpRequested`] to the
    /// caller.
    ReturnError,
}

impl ParseErrorPolicy {
    /// Applies the policy to an error raised while binding.
    ///
    /// Configuration errors are always returned. Under [`Self::Exit`] parse
    /// errors and help requests end the process. Under
    /// [`Self::ReturnError`] a help request gets its text replaced by
    /// `help()`, so commands can report their full help rather than the
    /// bare flag listing.
    #[must_use]
    pub fn resolve<F>(self, err: ArgpError, help: F) -> ArgpError
    where
        F: FnOnce() -> String,
    {
        match (self, err) {
            (Self::ReturnError, ArgpError::HelpRequested { command, .. }) => {
                ArgpError::HelpRequested {
                    command,
                    help: help(),
                }
            }
            (Self::Exit, err @ (ArgpError::Parse { .. } | ArgpError::HelpRequested { .. })) => {
                exit_with(&err, &help())
            }
            (_, err) => err,
        }
    }
}

fn exit_with(err: &ArgpError, help: &str) -> ! {
    let code = err.exit_code();
    let mut stderr = std::io::stderr().lock();
    let written = if err.is_display_request() {
        stderr.write_all(help.as_bytes())
    } else {
        writeln!(stderr, "{err}").and_then(|()| stderr.write_all(help.as_bytes()))
    };
    if let Err(io_err) = written {
        warn!(error = %io_err, "failed to write command-line diagnostics");
    }
    std::process::exit(code)
}

/// Parses `args` against the flags `options` describes, without modifying
/// `options`.
///
/// # Errors
///
/// Returns configuration errors from building the flag set, and
/// [`ArgpError::Parse`] or [`ArgpError::HelpRequested`] from parsing.
pub fn parse_args<O>(command: &str, options: &O, args: &[String]) -> ArgpResult<ParsedArgs>
where
    O: Options + ?Sized,
{
    FlagSet::from_options(command, options)?.parse(args)
}

/// Stores parsed values into `options` and returns the remaining tokens.
///
/// Values are applied in command-line order, so a repeated flag keeps its
/// last value.
///
/// # Errors
///
/// Propagates [`Options::assign`] failures.
pub fn apply<O>(options: &mut O, parsed: ParsedArgs) -> ArgpResult<Vec<String>>
where
    O: Options + ?Sized,
{
    let ParsedArgs {
        assignments,
        remaining,
    } = parsed;
    for (index, value) in assignments {
        trace!(index, ?value, "assigning option");
        options.assign(index, value)?;
    }
    Ok(remaining)
}

/// Binds `args` onto `options` and returns the tokens left after the last
/// recognised flag.
///
/// Fields without a matching flag keep their current values.
///
/// # Errors
///
/// Returns configuration errors for malformed options types. Parse errors
/// and help requests are returned under [`ParseErrorPolicy::ReturnError`];
/// under [`ParseErrorPolicy::Exit`] they terminate the process.
///
/// # Examples
///
/// ```
/// use argp::{Options, ParseErrorPolicy, bind_and_parse};
///
/// #[derive(Options, Default)]
/// struct Opts {
///     #[argp("i,an integer")]
///     i: isize,
/// }
///
/// let mut opts = Opts::default();
/// let args: Vec<String> = ["-i", "12", "sub"].map(String::from).to_vec();
/// let rest = bind_and_parse("root", &mut opts, &args, ParseErrorPolicy::ReturnError)?;
/// assert_eq!(opts.i, 12);
/// assert_eq!(rest, ["sub"]);
/// # Ok::<(), argp::ArgpError>(())
/// ```
pub fn bind_and_parse<O>(
    command: &str,
    options: &mut O,
    args: &[String],
    policy: ParseErrorPolicy,
) -> ArgpResult<Vec<String>>
where
    O: Options + ?Sized,
{
    let flags = FlagSet::from_options(command, options)?;
    let parsed = flags
        .parse(args)
        .map_err(|err| policy.resolve(err, || flags.usage()))?;
    apply(options, parsed)
}
