//! Usage rendering for a [`FlagSet`].

use super::{FlagSet, FlagSpec};

impl FlagSet {
    /// Renders `Usage of <name>:` followed by [`FlagSet::defaults`].
    #[must_use]
    pub fn usage(&self) -> String {
        format!("Usage of {}:\n{}", self.name, self.defaults())
    }

    /// Renders one entry per flag, sorted by name.
    ///
    /// Each entry reads `  -name placeholder` followed by the description on
    /// an indented line, and ` (default ...)` when the default is not the
    /// zero value. A single-letter flag with no placeholder keeps its
    /// description on the same line. A back-quoted word in the description
    /// replaces the placeholder.
    #[must_use]
    pub fn defaults(&self) -> String {
        self.iter().fold(String::new(), |mut out, spec| {
            out.push_str(&render_entry(spec));
            out.push('\n');
            out
        })
    }
}

fn render_entry(spec: &FlagSpec) -> String {
    let mut line = format!("  -{}", spec.name());
    let (placeholder, description) = unquote_usage(spec);
    if !placeholder.is_empty() {
        line.push(' ');
        line.push_str(&placeholder);
    }
    if line.len() <= 4 {
        line.push('\t');
    } else {
        line.push_str("\n    \t");
    }
    line.push_str(&description.replace('\n', "\n    \t"));
    let default = spec.default_value();
    if !default.is_zero() {
        // Display already quotes string defaults.
        line.push_str(&format!(" (default {default})"));
    }
    line
}

/// Extracts a back-quoted placeholder from the description, falling back to
/// the kind's own placeholder.
fn unquote_usage(spec: &FlagSpec) -> (String, String) {
    let description = spec.description();
    if let Some((before, rest)) = description.split_once('`')
        && let Some((word, after)) = rest.split_once('`')
    {
        return (word.to_owned(), format!("{before}{word}{after}"));
    }
    (spec.kind().placeholder().to_owned(), description.to_owned())
}
