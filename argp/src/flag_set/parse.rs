//! Token parsing against a [`FlagSet`].
//!
//! Accepted forms are `-name`, `--name`, `-name=value` and `-name value`.
//! Parsing stops at the first token that is not a flag, at a lone `-`, or
//! after a `--` terminator, which is consumed.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::{FlagSet, ParsedArgs};
use crate::{ArgpError, ArgpResult, FlagKind, FlagValue};

/// Result of examining the token at the front of the queue.
enum Step {
    Flag { index: usize, value: FlagValue },
    Done,
}

impl FlagSet {
    /// Parses `args` against the registered flags.
    ///
    /// # Errors
    ///
    /// Returns [`ArgpError::Parse`] for bad syntax, unknown flags, missing
    /// or invalid values, and [`ArgpError::HelpRequested`] (carrying this
    /// set's usage text) for `-h` or `-help` when no flag claims those names.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp::{FlagSet, FlagSpec, FlagValue};
    /// let mut flags = FlagSet::new("root");
    /// flags.register(FlagSpec::from_tag(0, "i", FlagValue::Int(0))?)?;
    /// let args: Vec<String> = ["-i", "12", "sub"].map(String::from).to_vec();
    /// let parsed = flags.parse(&args)?;
    /// assert_eq!(parsed.assignments, vec![(0, FlagValue::Int(12))]);
    /// assert_eq!(parsed.remaining, vec!["sub".to_owned()]);
    /// # Ok::<(), argp::ArgpError>(())
    /// ```
    pub fn parse(&self, args: &[String]) -> ArgpResult<ParsedArgs> {
        let mut queue: VecDeque<String> = args.iter().cloned().collect();
        let mut assignments = Vec::new();
        while let Step::Flag { index, value } = self.parse_one(&mut queue)? {
            trace!(command = %self.name, index, ?value, "parsed flag");
            assignments.push((index, value));
        }
        let remaining: Vec<String> = queue.into();
        debug!(
            command = %self.name,
            flags = assignments.len(),
            remaining = remaining.len(),
            "parsed arguments"
        );
        Ok(ParsedArgs {
            assignments,
            remaining,
        })
    }

    fn parse_one(&self, queue: &mut VecDeque<String>) -> ArgpResult<Step> {
        let Some(front) = queue.front() else {
            return Ok(Step::Done);
        };
        let Some(body) = front.strip_prefix('-').filter(|body| !body.is_empty()) else {
            return Ok(Step::Done);
        };
        let spelled = match body.strip_prefix('-') {
            Some("") => {
                queue.pop_front();
                return Ok(Step::Done);
            }
            Some(rest) => rest,
            None => body,
        };
        if spelled.is_empty() || spelled.starts_with('-') || spelled.starts_with('=') {
            return Err(self.fail(format!("bad flag syntax: {front}")));
        }
        let (name, inline) = match spelled.split_once('=') {
            Some((key, value)) => (key.to_owned(), Some(value.to_owned())),
            None => (spelled.to_owned(), None),
        };
        queue.pop_front();

        let Some(spec) = self.lookup(&name) else {
            if name == "help" || name == "h" {
                return Err(ArgpError::HelpRequested {
                    command: self.name.clone(),
                    help: self.usage(),
                });
            }
            return Err(self.fail(format!("flag provided but not defined: -{name}")));
        };

        if spec.kind() == FlagKind::Bool {
            let value = match inline {
                Some(raw) => FlagKind::Bool.parse(&raw).map_err(|reason| {
                    self.fail(format!("invalid boolean value {raw:?} for -{name}: {reason}"))
                })?,
                None => FlagValue::Bool(true),
            };
            return Ok(Step::Flag {
                index: spec.index(),
                value,
            });
        }

        let Some(raw) = inline.or_else(|| queue.pop_front()) else {
            return Err(self.fail(format!("flag needs an argument: -{name}")));
        };
        let value = spec.kind().parse(&raw).map_err(|reason| {
            self.fail(format!("invalid value {raw:?} for flag -{name}: {reason}"))
        })?;
        Ok(Step::Flag {
            index: spec.index(),
            value,
        })
    }

    fn fail(&self, message: String) -> ArgpError {
        ArgpError::parse(&self.name, message)
    }
}
