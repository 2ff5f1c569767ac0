//! Command tree for the `greeter` demo.
//!
//! The root command owns [`GlobalOptions`] behind `Rc<RefCell<_>>` so the
//! `greet` handler can read `-recipient` and `-quiet` after the root flags
//! are bound. `version` takes no flags at all.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use argp::{Cmd, Options, ParseErrorPolicy};
use tracing::debug;

use crate::error::GreeterError;
use crate::message::greeting;

/// Flags accepted before the sub-command name.
#[derive(Debug, Clone, PartialEq, Eq, Options)]
pub struct GlobalOptions {
    /// Who to greet.
    #[argp("recipient,who to greet")]
    pub recipient: String,
    /// Drop the closing punctuation.
    #[argp("quiet,leave off punctuation")]
    pub quiet: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            recipient: "World".to_owned(),
            quiet: false,
        }
    }
}

/// Flags accepted by `greet`.
#[derive(Debug, Clone, PartialEq, Eq, Options)]
pub struct GreetOptions {
    /// Word opening the greeting.
    #[argp("salutation,opening `word`")]
    pub salutation: String,
    /// How many times the salutation is said.
    #[argp("repeat,number of salutations")]
    pub repeat: usize,
    /// End with an exclamation mark.
    #[argp("excited,end with an exclamation mark")]
    pub excited: bool,
}

impl Default for GreetOptions {
    fn default() -> Self {
        Self {
            salutation: "Hello".to_owned(),
            repeat: 1,
            excited: false,
        }
    }
}

/// Shared handle to the root command's options.
pub type SharedGlobals = Rc<RefCell<GlobalOptions>>;

/// Output sink shared by every handler.
pub type Output<W> = Rc<RefCell<W>>;

/// Builds the `greeter` command tree writing to `out`.
///
/// Every command in the tree uses `policy` for parse errors and help
/// requests.
#[must_use]
pub fn build<W: Write + 'static>(out: &Output<W>, policy: ParseErrorPolicy) -> Cmd<SharedGlobals> {
    let globals: SharedGlobals = Rc::new(RefCell::new(GlobalOptions::default()));

    let greet = {
        let parent = Rc::clone(&globals);
        let sink = Rc::clone(out);
        Cmd::new(
            "greet",
            "print a greeting",
            GreetOptions::default(),
            move |opts: &mut GreetOptions| -> Result<(), GreeterError> {
                let line = greeting(&parent.borrow(), opts)?;
                debug!(%line, "rendered greeting");
                writeln!(sink.borrow_mut(), "{line}")?;
                Ok(())
            },
        )
        .with_parse_error_policy(policy)
    };

    let version = {
        let sink = Rc::clone(out);
        Cmd::new("version", "print the version", (), move |_: &mut ()| {
            writeln!(sink.borrow_mut(), "greeter {}", env!("CARGO_PKG_VERSION"))
        })
        .with_parse_error_policy(policy)
    };

    Cmd::new(
        "greeter",
        "a friendly greeter",
        globals,
        |_: &mut SharedGlobals| -> Result<(), GreeterError> {
            Err(GreeterError::MissingCommand("greet, version".to_owned()))
        },
    )
    .with_parse_error_policy(policy)
    .with_sub_cmd(greet)
    .with_sub_cmd(version)
}
