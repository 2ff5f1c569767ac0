//! Helpers for slicing rendered help text in assertions.

/// Returns the lines following the first line equal to `header`, stopping at
/// the next line that starts in column zero.
///
/// Help output indents everything that belongs to a section, so this picks
/// out e.g. the entries under `sub-commands:`.
#[must_use]
pub fn section<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| line.starts_with(' ') || line.starts_with('\t'))
        .collect()
}

/// Returns the names of flags listed in a usage block, in listing order.
#[must_use]
pub fn flag_names(usage: &str) -> Vec<&str> {
    usage
        .lines()
        .filter_map(|line| line.strip_prefix("  -"))
        .filter_map(|rest| rest.split(['\t', ' ']).next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{flag_names, section};

    const HELP: &str = concat!(
        "Command root:\n",
        "the root command\n",
        "Usage of root:\n",
        "  -b\tspecify bool option\n",
        "  -name string\n",
        "    \tspecify name\n",
        "sub-commands:\n",
        "\tsub                      sub command\n",
    );

    #[test]
    fn section_collects_indented_lines() {
        assert_eq!(
            section(HELP, "sub-commands:"),
            vec!["\tsub                      sub command"]
        );
    }

    #[test]
    fn section_of_missing_header_is_empty() {
        assert!(section(HELP, "missing:").is_empty());
    }

    #[test]
    fn flag_names_skip_description_lines() {
        assert_eq!(flag_names(HELP), vec!["b", "name"]);
    }
}
