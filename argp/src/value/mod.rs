//! Scalar flag values and their bridge to options fields.
//!
//! Every supported field type maps onto exactly one [`FlagKind`]. Values
//! travel between the parser and the options struct as [`FlagValue`]s:
//! [`FlagValue::capture`] reads a field's current value to use as the flag
//! default, and [`FlagValue::store`] writes a parsed value back.

use std::any::{Any, type_name};
use std::fmt;

use crate::{ArgpError, ArgpResult};

mod literal;

pub(crate) use literal::{parse_bool, parse_float, parse_signed, parse_unsigned};

/// Scalar kinds a flag can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// Native-width signed integer (`isize`).
    Int,
    /// 64-bit signed integer (`i64`).
    Int64,
    /// Native-width unsigned integer (`usize`).
    Uint,
    /// 64-bit unsigned integer (`u64`).
    Uint64,
    /// 64-bit floating point (`f64`).
    Float64,
    /// Boolean switch (`bool`).
    Bool,
    /// UTF-8 text (`String`).
    String,
}

impl FlagKind {
    /// Placeholder shown after the flag name in usage output.
    ///
    /// Booleans have none because they take no value.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Int | Self::Int64 => "int",
            Self::Uint | Self::Uint64 => "uint",
            Self::Float64 => "float",
            Self::Bool => "",
            Self::String => "string",
        }
    }

    /// Parses `raw` as a value of this kind.
    ///
    /// Returns the reason text on failure so callers can embed it in their
    /// own diagnostics.
    pub(crate) fn parse(self, raw: &str) -> Result<FlagValue, String> {
        let value = match self {
            Self::Int => FlagValue::Int(parse_signed::<isize>(raw)?),
            Self::Int64 => FlagValue::Int64(parse_signed::<i64>(raw)?),
            Self::Uint => FlagValue::Uint(parse_unsigned::<usize>(raw)?),
            Self::Uint64 => FlagValue::Uint64(parse_unsigned::<u64>(raw)?),
            Self::Float64 => FlagValue::Float64(parse_float(raw)?),
            Self::Bool => FlagValue::Bool(parse_bool(raw)?),
            Self::String => FlagValue::String(raw.to_owned()),
        };
        Ok(value)
    }
}

/// A typed flag value.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    /// Value for [`FlagKind::Int`].
    Int(isize),
    /// Value for [`FlagKind::Int64`].
    Int64(i64),
    /// Value for [`FlagKind::Uint`].
    Uint(usize),
    /// Value for [`FlagKind::Uint64`].
    Uint64(u64),
    /// Value for [`FlagKind::Float64`].
    Float64(f64),
    /// Value for [`FlagKind::Bool`].
    Bool(bool),
    /// Value for [`FlagKind::String`].
    String(String),
}

impl FlagValue {
    /// Reads the current value of an options field.
    ///
    /// # Errors
    ///
    /// Returns [`ArgpError::UnsupportedType`] when `T` is not one of the
    /// supported scalar types.
    ///
    /// # Examples
    ///
    /// ```
    /// use argp::FlagValue;
    /// let value = FlagValue::capture("port", &8080_u64)?;
    /// assert_eq!(value, FlagValue::Uint64(8080));
    /// assert!(FlagValue::capture("ports", &vec![1_u16]).is_err());
    /// # Ok::<(), argp::ArgpError>(())
    /// ```
    pub fn capture<T: Any>(field: &str, value: &T) -> ArgpResult<Self> {
        let any: &dyn Any = value;
        if let Some(v) = any.downcast_ref::<isize>() {
            Ok(Self::Int(*v))
        } else if let Some(v) = any.downcast_ref::<i64>() {
            Ok(Self::Int64(*v))
        } else if let Some(v) = any.downcast_ref::<usize>() {
            Ok(Self::Uint(*v))
        } else if let Some(v) = any.downcast_ref::<u64>() {
            Ok(Self::Uint64(*v))
        } else if let Some(v) = any.downcast_ref::<f64>() {
            Ok(Self::Float64(*v))
        } else if let Some(v) = any.downcast_ref::<bool>() {
            Ok(Self::Bool(*v))
        } else if let Some(v) = any.downcast_ref::<String>() {
            Ok(Self::String(v.clone()))
        } else {
            Err(unsupported::<T>(field))
        }
    }

    /// Writes this value into an options field.
    ///
    /// # Errors
    ///
    /// Returns [`ArgpError::UnsupportedType`] when the field's type does not
    /// match the value's kind.
    pub fn store<T: Any>(self, field: &str, slot: &mut T) -> ArgpResult<()> {
        let any: &mut dyn Any = slot;
        let stored = match self {
            Self::Int(v) => any.downcast_mut::<isize>().map(|s| *s = v),
            Self::Int64(v) => any.downcast_mut::<i64>().map(|s| *s = v),
            Self::Uint(v) => any.downcast_mut::<usize>().map(|s| *s = v),
            Self::Uint64(v) => any.downcast_mut::<u64>().map(|s| *s = v),
            Self::Float64(v) => any.downcast_mut::<f64>().map(|s| *s = v),
            Self::Bool(v) => any.downcast_mut::<bool>().map(|s| *s = v),
            Self::String(v) => any.downcast_mut::<String>().map(|s| *s = v),
        };
        stored.ok_or_else(|| unsupported::<T>(field))
    }

    /// Kind of this value.
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        match self {
            Self::Int(_) => FlagKind::Int,
            Self::Int64(_) => FlagKind::Int64,
            Self::Uint(_) => FlagKind::Uint,
            Self::Uint64(_) => FlagKind::Uint64,
            Self::Float64(_) => FlagKind::Float64,
            Self::Bool(_) => FlagKind::Bool,
            Self::String(_) => FlagKind::String,
        }
    }

    /// Returns `true` when the value equals its kind's zero value.
    ///
    /// Usage output omits `(default ...)` for zero defaults.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(v) => *v == 0,
            Self::Int64(v) => *v == 0,
            Self::Uint(v) => *v == 0,
            Self::Uint64(v) => *v == 0,
            Self::Float64(v) => v.to_bits() == 0,
            Self::Bool(v) => !*v,
            Self::String(v) => v.is_empty(),
        }
    }
}

/// Formats the value the way usage output shows defaults: strings quoted,
/// everything else bare.
impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Uint64(v) => write!(f, "{v}"),
            Self::Float64(v) => f.write_str(&format_float(*v)),
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
        }
    }
}

/// Shortest round-trip form, switching to exponent notation (`1e+06`,
/// `1e-05`) when the decimal exponent is below -4 or at least 6.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-Inf" } else { "+Inf" }.to_owned();
    }
    let scientific = format!("{value:e}");
    if let Some((mantissa, power)) = scientific.split_once('e')
        && let Ok(exponent) = power.parse::<i32>()
        && !(-4..6).contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }
    value.to_string()
}

fn unsupported<T>(field: &str) -> ArgpError {
    ArgpError::UnsupportedType {
        field: field.to_owned(),
        type_name: type_name::<T>(),
    }
}

#[cfg(test)]
mod tests;
