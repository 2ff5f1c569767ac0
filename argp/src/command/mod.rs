//! Command nodes and sub-command dispatch.
//!
//! A [`Cmd`] owns an options value, a handler and any number of named
//! sub-commands. Running it binds the tokens onto its options first; if the
//! first leftover token names a sub-command, control passes to that child
//! with the rest of the tokens, otherwise the handler runs.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::ffi::OsString;
use std::fmt;

use tracing::{debug, trace};

use crate::binder::{self, ParseErrorPolicy};
use crate::{ArgpError, ArgpResult, FlagSet, HandlerError, Options};

/// A runnable node in a command tree.
pub trait Command {
    /// Binds `args` and runs this command or the sub-command they select.
    ///
    /// `args` excludes the program name and this command's own name.
    ///
    /// # Errors
    ///
    /// Returns binding errors before anything runs, and otherwise whatever
    /// the selected handler returns.
    fn run(&mut self, args: &[String]) -> ArgpResult<()>;

    /// Renders the command's name, usage, flags and sub-commands.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the options type cannot describe
    /// its flags.
    fn help(&self) -> ArgpResult<String>;

    /// Name the command is registered and invoked under.
    fn name(&self) -> &str;

    /// One-line description shown in the parent's sub-command listing.
    fn describe(&self) -> &str;
}

type Handler<T> = Box<dyn FnMut(&mut T) -> Result<(), HandlerError>>;

/// A command whose flags are bound onto an options value of type `T`.
///
/// # Examples
///
/// ```
/// use argp::{Cmd, Command, Options, ParseErrorPolicy};
///
/// #[derive(Options, Default)]
/// struct Person {
///     #[argp("name,the name of person")]
///     name: String,
///     #[argp("age,the age of person")]
///     age: usize,
/// }
///
/// let mut cmd = Cmd::new(
///     "person",
///     "read a person's name and age",
///     Person { age: 18, ..Person::default() },
///     |person: &mut Person| {
///         assert_eq!(person.name, "pike");
///         assert_eq!(person.age, 18);
///         Ok::<_, std::io::Error>(())
///     },
/// )
/// .with_parse_error_policy(ParseErrorPolicy::ReturnError);
///
/// let args: Vec<String> = ["-name", "pike"].map(String::from).to_vec();
/// cmd.run(&args)?;
/// # Ok::<(), argp::ArgpError>(())
/// ```
pub struct Cmd<T> {
    name: String,
    usage: String,
    options: T,
    handler: Handler<T>,
    sub_commands: BTreeMap<String, Box<dyn Command>>,
    policy: ParseErrorPolicy,
    remaining: Vec<String>,
}

impl<T: Options> Cmd<T> {
    /// Creates a command with no sub-commands and the default
    /// [`ParseErrorPolicy::Exit`] policy.
    ///
    /// `options` holds the defaults; flags given on the command line
    /// overwrite them in place before `handler` runs.
    pub fn new<F, E>(
        name: impl Into<String>,
        usage: impl Into<String>,
        options: T,
        mut handler: F,
    ) -> Self
    where
        F: FnMut(&mut T) -> Result<(), E> + 'static,
        E: Into<HandlerError>,
    {
        Self {
            name: name.into(),
            usage: usage.into(),
            options,
            handler: Box::new(move |options| handler(options).map_err(Into::into)),
            sub_commands: BTreeMap::new(),
            policy: ParseErrorPolicy::default(),
            remaining: Vec::new(),
        }
    }

    /// Sets how parse errors and help requests are handled.
    ///
    /// The policy belongs to this node alone. Sub-commands keep their own,
    /// so a tree that should return errors instead of exiting needs the
    /// policy set on every node.
    #[must_use]
    pub const fn with_parse_error_policy(mut self, policy: ParseErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Registers a sub-command, builder style.
    ///
    /// # Panics
    ///
    /// Panics when a sub-command with the same name is already registered.
    #[must_use]
    #[track_caller]
    pub fn with_sub_cmd<C: Command + 'static>(mut self, sub: C) -> Self {
        self.add_sub_cmd(sub);
        self
    }

    /// Registers `sub` under its own name.
    ///
    /// A clash is a mistake in how the command tree is built, not a runtime
    /// condition; use [`Cmd::try_add_sub_cmd`] to handle it instead.
    ///
    /// # Panics
    ///
    /// Panics when a sub-command with the same name is already registered.
    #[track_caller]
    pub fn add_sub_cmd<C: Command + 'static>(&mut self, sub: C) -> &mut Self {
        if let Err(err) = self.try_add_sub_cmd(sub) {
            panic!("{err}");
        }
        self
    }

    /// Registers `sub` under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`ArgpError::DuplicateSubCommand`] when the name is taken;
    /// the existing sub-command stays registered.
    pub fn try_add_sub_cmd<C: Command + 'static>(&mut self, sub: C) -> ArgpResult<&mut Self> {
        match self.sub_commands.entry(sub.name().to_owned()) {
            Entry::Occupied(existing) => Err(ArgpError::DuplicateSubCommand {
                parent: self.name.clone(),
                name: existing.key().clone(),
            }),
            Entry::Vacant(slot) => {
                trace!(command = %self.name, sub_command = %slot.key(), "registered sub-command");
                slot.insert(Box::new(sub));
                Ok(self)
            }
        }
    }

    /// Looks up a registered sub-command.
    #[must_use]
    pub fn sub_command(&self, name: &str) -> Option<&dyn Command> {
        self.sub_commands.get(name).map(AsRef::as_ref)
    }

    /// Names of the registered sub-commands, sorted.
    pub fn sub_command_names(&self) -> impl Iterator<Item = &str> {
        self.sub_commands.keys().map(String::as_str)
    }

    /// Current options, reflecting the last run.
    #[must_use]
    pub const fn options(&self) -> &T {
        &self.options
    }

    /// Mutable access to the options, e.g. to reset defaults between runs.
    pub const fn options_mut(&mut self) -> &mut T {
        &mut self.options
    }

    /// Consumes the command and returns its options.
    #[must_use]
    pub fn into_options(self) -> T {
        self.options
    }

    /// Policy applied to parse errors and help requests.
    #[must_use]
    pub const fn parse_error_policy(&self) -> ParseErrorPolicy {
        self.policy
    }

    /// Tokens left after this command's flags in the last run that did not
    /// dispatch to a sub-command.
    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Runs the command with the process arguments, minus the program name.
    ///
    /// # Errors
    ///
    /// See [`Cmd::run_os`].
    pub fn run_from_env(&mut self) -> ArgpResult<()> {
        self.run_os(std::env::args_os().skip(1))
    }

    /// Runs the command with platform strings, e.g. from
    /// [`std::env::args_os`].
    ///
    /// # Errors
    ///
    /// An argument that is not valid UTF-8 is a parse error, handled by this
    /// command's [`ParseErrorPolicy`]. Otherwise see [`Command::run`].
    pub fn run_os<I, S>(&mut self, args: I) -> ArgpResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let tokens = args
            .into_iter()
            .map(|arg| arg.into().into_string())
            .collect::<Result<Vec<String>, OsString>>()
            .map_err(|os| {
                let message = format!("invalid UTF-8 in argument {os:?}");
                let err = ArgpError::parse(&self.name, message);
                self.policy.resolve(err, || self.help_or_reason())
            })?;
        self.run(&tokens)
    }

    fn help_or_reason(&self) -> String {
        self.help().unwrap_or_else(|err| err.to_string())
    }
}

impl<T: Options> Command for Cmd<T> {
    fn run(&mut self, args: &[String]) -> ArgpResult<()> {
        let parsed = binder::parse_args(&self.name, &self.options, args)
            .map_err(|err| self.policy.resolve(err, || self.help_or_reason()))?;
        let remaining = binder::apply(&mut self.options, parsed)?;

        if let Some((first, rest)) = remaining.split_first()
            && let Some(sub) = self.sub_commands.get_mut(first)
        {
            debug!(command = %self.name, sub_command = %first, "dispatching to sub-command");
            return sub.run(rest);
        }

        debug!(command = %self.name, remaining = remaining.len(), "running handler");
        self.remaining = remaining;
        (self.handler)(&mut self.options).map_err(ArgpError::Handler)
    }

    fn help(&self) -> ArgpResult<String> {
        let flags = FlagSet::from_options(&self.name, &self.options)?;
        let mut out = format!("Command {}:\n{}\n", self.name, self.usage);
        out.push_str(&flags.usage());
        if !self.sub_commands.is_empty() {
            out.push_str("sub-commands:\n");
            for sub in self.sub_commands.values() {
                out.push_str(&format!("\t{:<25}{}\n", sub.name(), sub.describe()));
            }
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> &str {
        &self.usage
    }
}

impl<T: fmt::Debug> fmt::Debug for Cmd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cmd")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("options", &self.options)
            .field("sub_commands", &self.sub_commands.keys().collect::<Vec<_>>())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
