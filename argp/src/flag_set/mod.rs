//! Per-invocation flag registry.
//!
//! A [`FlagSet`] is built fresh for every parse from the [`FlagSpec`]s an
//! options value reports. Parsing never touches the options value; it
//! yields [`ParsedArgs`] holding the typed assignments and the unconsumed
//! remainder, which the binder then applies.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{ArgpError, ArgpResult, FieldTag, FlagKind, FlagValue, Options};

mod parse;
mod usage;

/// Registration of one options field as a flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagSpec {
    index: usize,
    tag: FieldTag,
    default: FlagValue,
}

impl FlagSpec {
    /// Creates a spec for the field at `index` from an already parsed tag.
    #[must_use]
    pub const fn new(index: usize, tag: FieldTag, default: FlagValue) -> Self {
        Self {
            index,
            tag,
            default,
        }
    }

    /// Creates a spec for the field at `index` from raw tag text.
    ///
    /// # Errors
    ///
    /// Returns [`ArgpError::MalformedTag`] when the tag cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp::{FlagSpec, FlagValue};
    /// let spec = FlagSpec::from_tag(0, "b,specify bool option", FlagValue::Bool(false))?;
    /// assert_eq!(spec.name(), "b");
    /// # Ok::<(), argp::ArgpError>(())
    /// ```
    pub fn from_tag(index: usize, tag: &str, default: FlagValue) -> ArgpResult<Self> {
        Ok(Self::new(index, FieldTag::parse(tag)?, default))
    }

    /// Index of the field within its options type.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Flag name without dashes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.tag.name
    }

    /// Help text for the flag.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.tag.description
    }

    /// Value the field held when the flag set was built.
    #[must_use]
    pub const fn default_value(&self) -> &FlagValue {
        &self.default
    }

    /// Kind of value the flag accepts.
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        self.default.kind()
    }
}

/// Typed values parsed from a token list, not yet applied to any options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArgs {
    /// Field index and value for every flag occurrence, in command-line order.
    pub assignments: Vec<(usize, FlagValue)>,
    /// Tokens after the last recognised flag, in their original order.
    pub remaining: Vec<String>,
}

/// Named collection of flags for one command.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    name: String,
    flags: BTreeMap<String, FlagSpec>,
}

impl FlagSet {
    /// Creates an empty flag set for the command `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: BTreeMap::new(),
        }
    }

    /// Builds a flag set holding one flag per field of `options`.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from [`Options::flags`] and returns
    /// [`ArgpError::DuplicateFlag`] when two fields share a flag name.
    pub fn from_options<O>(name: impl Into<String>, options: &O) -> ArgpResult<Self>
    where
        O: Options + ?Sized,
    {
        let mut set = Self::new(name);
        for spec in options.flags()? {
            set.register(spec)?;
        }
        debug!(command = %set.name, flags = set.flags.len(), "built flag set");
        Ok(set)
    }

    /// Adds a flag.
    ///
    /// # Errors
    ///
    /// Returns [`ArgpError::DuplicateFlag`] when the name is already taken;
    /// the existing flag is kept.
    pub fn register(&mut self, spec: FlagSpec) -> ArgpResult<()> {
        if self.flags.contains_key(spec.name()) {
            return Err(ArgpError::DuplicateFlag {
                name: spec.name().to_owned(),
            });
        }
        self.flags.insert(spec.name().to_owned(), spec);
        Ok(())
    }

    /// Command name the flag set belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a flag by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.get(name)
    }

    /// Iterates over the flags sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &FlagSpec> {
        self.flags.values()
    }

    /// Number of registered flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` when no flags are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
