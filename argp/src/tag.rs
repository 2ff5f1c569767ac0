//! Field tag parsing.
//!
//! A tag is either `name` or `name,description`. The description runs to the
//! end of the tag; commas cannot be escaped, so a second comma is rejected.

use crate::{ArgpError, ArgpResult};

/// Flag metadata parsed from a field tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTag {
    /// External flag spelling, without dashes.
    pub name: String,
    /// Help text; empty when the tag has no description.
    pub description: String,
}

impl FieldTag {
    /// Parses `name` or `name,description`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgpError::MalformedTag`] when the tag holds more than one
    /// comma, the name is empty, or the name would be unreadable on the
    /// command line (leading `-` or an embedded `=`).
    ///
    /// # Examples
    ///
    /// ```
    /// use argp::FieldTag;
    /// let tag = FieldTag::parse("name,specify name")?;
    /// assert_eq!(tag.name, "name");
    /// assert_eq!(tag.description, "specify name");
    /// assert!(FieldTag::parse("a,b,c").is_err());
    /// # Ok::<(), argp::ArgpError>(())
    /// ```
    pub fn parse(tag: &str) -> ArgpResult<Self> {
        let (name, description) = tag.split_once(',').unwrap_or((tag, ""));
        if description.contains(',') {
            return Err(ArgpError::malformed_tag(tag, "more than one comma"));
        }
        if name.is_empty() {
            return Err(ArgpError::malformed_tag(tag, "flag name is empty"));
        }
        if name.starts_with('-') {
            return Err(ArgpError::malformed_tag(tag, "flag name begins with -"));
        }
        if name.contains('=') {
            return Err(ArgpError::malformed_tag(tag, "flag name contains ="));
        }
        Ok(Self {
            name: name.to_owned(),
            description: description.to_owned(),
        })
    }
}
