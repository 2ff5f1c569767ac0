//! Bind command-line flags onto plain structs and dispatch nested
//! sub-commands.
//!
//! Derive [`Options`] on a struct whose fields are `isize`, `i64`, `usize`,
//! `u64`, `f64`, `bool` or `String`, tag each field with
//! `#[argp("name,description")]`, and wrap it in a [`Cmd`] with a handler:
//!
//! ```
//! use argp::{Cmd, Command, Options, ParseErrorPolicy};
//!
//! #[derive(Options, Default)]
//! struct Root {
//!     #[argp("v,verbose output")]
//!     verbose: bool,
//! }
//!
//! #[derive(Options, Default)]
//! struct Fetch {
//!     #[argp("depth,history depth")]
//!     depth: u64,
//! }
//!
//! let fetch = Cmd::new("fetch", "download objects", Fetch::default(), |fetch: &mut Fetch| {
//!     assert_eq!(fetch.depth, 1);
//!     Ok::<_, std::io::Error>(())
//! })
//! .with_parse_error_policy(ParseErrorPolicy::ReturnError);
//!
//! let mut root = Cmd::new("tool", "an example tool", Root::default(), |_: &mut Root| {
//!     Ok::<_, std::io::Error>(())
//! })
//! .with_parse_error_policy(ParseErrorPolicy::ReturnError)
//! .with_sub_cmd(fetch);
//!
//! let args: Vec<String> = ["-v", "fetch", "-depth", "1"].map(String::from).to_vec();
//! root.run(&args)?;
//! assert!(root.options().verbose);
//! # Ok::<(), argp::ArgpError>(())
//! ```
//!
//! Root flags are parsed first; the first token that is not a flag is then
//! checked against the registered sub-command names. Handlers that need the
//! root's flags inside a sub-command share the options through
//! `Rc<RefCell<_>>`, which implements [`Options`] as well.

extern crate self as argp;

pub use argp_macros::Options;

mod binder;
mod command;
mod error;
mod flag_set;
mod options;
mod tag;
mod value;

pub use binder::{ParseErrorPolicy, apply, bind_and_parse, parse_args};
pub use command::{Cmd, Command};
pub use error::{ArgpError, ArgpResult, HandlerError};
pub use flag_set::{FlagSet, FlagSpec, ParsedArgs};
pub use options::Options;
pub use tag::FieldTag;
pub use value::{FlagKind, FlagValue};
