//! Literal grammars for flag values.
//!
//! Integers accept an optional sign (signed kinds only), a `0x`, `0o` or `0b`
//! base prefix, the legacy leading-`0` octal form and `_` digit separators.
//! Failures are reported as `parse error` or `value out of range`, the
//! wording used in flag diagnostics.

use std::num::IntErrorKind;

const SYNTAX: &str = "parse error";
const RANGE: &str = "value out of range";

/// Parses a signed integer and narrows it to `T`.
pub(crate) fn parse_signed<T: TryFrom<i128>>(raw: &str) -> Result<T, String> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let magnitude = parse_magnitude(digits)?;
    let wide = if negative {
        0_i128.checked_sub_unsigned(magnitude)
    } else {
        i128::try_from(magnitude).ok()
    };
    let wide = wide.ok_or_else(|| RANGE.to_owned())?;
    T::try_from(wide).map_err(|_| RANGE.to_owned())
}

/// Parses an unsigned integer and narrows it to `T`. Signs are rejected.
pub(crate) fn parse_unsigned<T: TryFrom<u128>>(raw: &str) -> Result<T, String> {
    let magnitude = parse_magnitude(raw)?;
    T::try_from(magnitude).map_err(|_| RANGE.to_owned())
}

pub(crate) fn parse_float(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>().map_err(|_| SYNTAX.to_owned())
}

pub(crate) fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(SYNTAX.to_owned()),
    }
}

fn parse_magnitude(digits: &str) -> Result<u128, String> {
    let (radix, body, prefixed) = split_radix(digits);
    let cleaned = strip_separators(body, prefixed)?;
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(SYNTAX.to_owned());
    }
    u128::from_str_radix(&cleaned, radix).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => RANGE.to_owned(),
        _ => SYNTAX.to_owned(),
    })
}

/// Splits a base prefix off `digits`, returning the radix, the remaining
/// digits and whether a prefix was present.
fn split_radix(digits: &str) -> (u32, &str, bool) {
    const PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    for (prefix, radix) in PREFIXES {
        if let Some(body) = digits.strip_prefix(prefix) {
            return (radix, body, true);
        }
    }
    match digits.strip_prefix('0') {
        Some(body) if !body.is_empty() => (8, body, true),
        _ => (10, digits, false),
    }
}

/// Removes `_` separators, which must sit between digits. A leading
/// separator is allowed directly after a base prefix.
fn strip_separators(body: &str, prefixed: bool) -> Result<String, String> {
    if !body.contains('_') {
        return Ok(body.to_owned());
    }
    let misplaced = body.ends_with('_')
        || body.contains("__")
        || (body.starts_with('_') && !prefixed);
    if misplaced {
        return Err(SYNTAX.to_owned());
    }
    Ok(body.chars().filter(|c| *c != '_').collect())
}
