//! Unit tests for flag value parsing and field conversion.

use rstest::rstest;

use super::{FlagKind, FlagValue, parse_bool, parse_signed, parse_unsigned};
use crate::ArgpError;

#[rstest]
#[case("12", 12)]
#[case("-12", -12)]
#[case("+7", 7)]
#[case("0x1F", 31)]
#[case("-0b101", -5)]
#[case("0o17", 15)]
#[case("017", 15)]
#[case("1_000", 1000)]
#[case("0x_ff", 255)]
#[case("0", 0)]
fn parses_signed_literals(#[case] raw: &str, #[case] expected: i64) {
    assert_eq!(parse_signed::<i64>(raw), Ok(expected));
}

#[rstest]
#[case("", "parse error")]
#[case("abc", "parse error")]
#[case("08", "parse error")]
#[case("1__0", "parse error")]
#[case("_1", "parse error")]
#[case("10_", "parse error")]
#[case("--1", "parse error")]
#[case("9223372036854775808", "value out of range")]
fn rejects_bad_signed_literals(#[case] raw: &str, #[case] reason: &str) {
    assert_eq!(parse_signed::<i64>(raw), Err(reason.to_owned()));
}

#[rstest]
fn accepts_signed_extremes() {
    assert_eq!(parse_signed::<i64>("-9223372036854775808"), Ok(i64::MIN));
    assert_eq!(parse_signed::<i64>("9223372036854775807"), Ok(i64::MAX));
}

#[rstest]
#[case("12", Ok(12))]
#[case("0xff", Ok(255))]
#[case("-1", Err("parse error"))]
#[case("+1", Err("parse error"))]
#[case("18446744073709551616", Err("value out of range"))]
fn parses_unsigned_literals(#[case] raw: &str, #[case] expected: Result<u64, &str>) {
    assert_eq!(parse_unsigned::<u64>(raw), expected.map_err(str::to_owned));
}

#[rstest]
#[case("1", true)]
#[case("t", true)]
#[case("TRUE", true)]
#[case("True", true)]
#[case("0", false)]
#[case("F", false)]
#[case("false", false)]
fn parses_boolean_spellings(#[case] raw: &str, #[case] expected: bool) {
    assert_eq!(parse_bool(raw), Ok(expected));
}

#[rstest]
#[case("yes")]
#[case("tRuE")]
#[case("")]
fn rejects_other_boolean_spellings(#[case] raw: &str) {
    assert!(parse_bool(raw).is_err());
}

#[rstest]
#[case(FlagKind::Int, "-3", FlagValue::Int(-3))]
#[case(FlagKind::Uint, "3", FlagValue::Uint(3))]
#[case(FlagKind::Float64, "12.34", FlagValue::Float64(12.34))]
#[case(FlagKind::String, "-dash", FlagValue::String("-dash".into()))]
fn kinds_parse_into_matching_values(
    #[case] kind: FlagKind,
    #[case] raw: &str,
    #[case] expected: FlagValue,
) {
    let parsed = kind.parse(raw);
    assert_eq!(parsed, Ok(expected.clone()));
    assert_eq!(expected.kind(), kind);
}

#[rstest]
fn capture_reads_each_supported_type() -> Result<(), ArgpError> {
    assert_eq!(FlagValue::capture("a", &-1_isize)?, FlagValue::Int(-1));
    assert_eq!(FlagValue::capture("b", &-2_i64)?, FlagValue::Int64(-2));
    assert_eq!(FlagValue::capture("c", &3_usize)?, FlagValue::Uint(3));
    assert_eq!(FlagValue::capture("d", &4_u64)?, FlagValue::Uint64(4));
    assert_eq!(FlagValue::capture("e", &0.5_f64)?, FlagValue::Float64(0.5));
    assert_eq!(FlagValue::capture("f", &true)?, FlagValue::Bool(true));
    assert_eq!(
        FlagValue::capture("g", &String::from("pike"))?,
        FlagValue::String("pike".into())
    );
    Ok(())
}

#[rstest]
fn capture_rejects_unsupported_types() {
    let err = FlagValue::capture("port", &8080_u16);
    assert!(matches!(
        err,
        Err(ArgpError::UnsupportedType { ref field, type_name: "u16" }) if field == "port"
    ));
}

#[rstest]
fn store_writes_matching_field() -> Result<(), ArgpError> {
    let mut name = String::from("before");
    FlagValue::String("after".into()).store("name", &mut name)?;
    assert_eq!(name, "after");
    Ok(())
}

#[rstest]
fn store_rejects_kind_mismatch() {
    let mut count = 0_i64;
    let err = FlagValue::Uint64(1).store("count", &mut count);
    assert!(matches!(err, Err(ArgpError::UnsupportedType { .. })));
    assert_eq!(count, 0);
}

#[rstest]
#[case(FlagValue::Int(0), true)]
#[case(FlagValue::Int64(5), false)]
#[case(FlagValue::Float64(0.0), true)]
#[case(FlagValue::Bool(false), true)]
#[case(FlagValue::Bool(true), false)]
#[case(FlagValue::String(String::new()), true)]
#[case(FlagValue::String("x".into()), false)]
fn zero_detection(#[case] value: FlagValue, #[case] zero: bool) {
    assert_eq!(value.is_zero(), zero);
}

#[rstest]
fn display_quotes_strings_only() {
    assert_eq!(FlagValue::String("pike".into()).to_string(), "\"pike\"");
    assert_eq!(FlagValue::Float64(12.34).to_string(), "12.34");
    assert_eq!(FlagValue::Bool(true).to_string(), "true");
}

#[rstest]
#[case(1e21, "1e+21")]
#[case(1e20, "1e+20")]
#[case(100_000.0, "100000")]
#[case(1e6, "1e+06")]
#[case(1_234_567.0, "1.234567e+06")]
#[case(-2.5e22, "-2.5e+22")]
#[case(0.0001, "0.0001")]
#[case(0.00001, "1e-05")]
#[case(1.5e-7, "1.5e-07")]
#[case(-12.5, "-12.5")]
#[case(0.0, "0")]
#[case(f64::INFINITY, "+Inf")]
#[case(f64::NEG_INFINITY, "-Inf")]
#[case(f64::NAN, "NaN")]
fn floats_switch_to_exponent_form_at_the_extremes(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(FlagValue::Float64(value).to_string(), expected);
}
