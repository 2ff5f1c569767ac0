//! The registration table connecting a struct's fields to flags.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{ArgpError, ArgpResult, FlagSpec, FlagValue};

/// A struct whose fields can be bound to command-line flags.
///
/// Usually derived with `#[derive(Options)]`, which reads each field's
/// `#[argp("name,description")]` tag. Hand-written implementations report
/// one [`FlagSpec`] per field and store parsed values by field index.
///
/// # Examples
///
/// ```
/// use argp::{ArgpError, ArgpResult, FlagSpec, FlagValue, Options};
///
/// struct Limits {
///     depth: u64,
/// }
///
/// impl Options for Limits {
///     fn flags(&self) -> ArgpResult<Vec<FlagSpec>> {
///         Ok(vec![FlagSpec::from_tag(
///             0,
///             "depth,maximum depth",
///             FlagValue::capture("depth", &self.depth)?,
///         )?])
///     }
///
///     fn assign(&mut self, index: usize, value: FlagValue) -> ArgpResult<()> {
///         match index {
///             0 => value.store("depth", &mut self.depth),
///             _ => Err(ArgpError::FieldIndex { index }),
///         }
///     }
/// }
/// ```
pub trait Options {
    /// Describes every field as a flag, in declaration order, using the
    /// field's current value as the default.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a tag is malformed or a field type
    /// is unsupported.
    fn flags(&self) -> ArgpResult<Vec<FlagSpec>>;

    /// Stores `value` into the field at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgpError::FieldIndex`] for an index this type never
    /// reported and [`ArgpError::UnsupportedType`] for a kind mismatch.
    fn assign(&mut self, index: usize, value: FlagValue) -> ArgpResult<()>;
}

/// Shared options, for handlers that read a parent's flags from inside a
/// sub-command.
///
/// The cell is borrowed only while flags are described or assigned, so a
/// clone of the `Rc` captured by another handler can read the values once
/// parsing finished.
impl<T: Options + ?Sized> Options for Rc<RefCell<T>> {
    fn flags(&self) -> ArgpResult<Vec<FlagSpec>> {
        self.borrow().flags()
    }

    fn assign(&mut self, index: usize, value: FlagValue) -> ArgpResult<()> {
        self.borrow_mut().assign(index, value)
    }
}

/// A command with no flags of its own.
impl Options for () {
    fn flags(&self) -> ArgpResult<Vec<FlagSpec>> {
        Ok(Vec::new())
    }

    fn assign(&mut self, index: usize, _value: FlagValue) -> ArgpResult<()> {
        Err(ArgpError::FieldIndex { index })
    }
}
