//! Base-10 integer and floating point conversions.

use crate::utils::error::{ConvertError, Result};
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

fn int_reason(err: &ParseIntError) -> &'static str {
    match err.kind() {
        IntErrorKind::Empty => "empty",
        IntErrorKind::InvalidDigit => "invalid digit",
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "out of range",
        _ => "invalid integer",
    }
}

fn parse_int<T>(s: &str, target: &'static str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    s.parse::<T>()
        .map_err(|e| ConvertError::parse(s, target, int_reason(&e)))
}

/// Parses a base-10 machine word integer.
pub fn to_int(s: &str) -> Result<isize> {
    parse_int(s, "isize")
}

pub fn from_int(i: isize) -> String {
    i.to_string()
}

pub fn to_int64(s: &str) -> Result<i64> {
    parse_int(s, "i64")
}

pub fn from_int64(i: i64) -> String {
    i.to_string()
}

/// Parses a base-10 unsigned integer. Any sign prefix, `+` included, is an
/// invalid digit.
pub fn to_uint64(s: &str) -> Result<u64> {
    if s.starts_with('+') {
        return Err(ConvertError::parse(s, "u64", "invalid digit"));
    }
    parse_int(s, "u64")
}

pub fn from_uint64(u: u64) -> String {
    u.to_string()
}

/// Parses decimal or exponent notation, plus `inf`/`infinity`/`nan` in any
/// case with an optional sign. Hexadecimal float literals (`0x1p-2`) are
/// not accepted. Finite text too large for `f64` is out of range rather
/// than infinity.
pub fn to_float64(s: &str) -> Result<f64> {
    let f = s
        .parse::<f64>()
        .map_err(|e| ConvertError::parse(s, "f64", e.to_string()))?;
    if f.is_infinite() && !is_infinity_literal(s) {
        return Err(ConvertError::parse(s, "f64", "out of range"));
    }
    Ok(f)
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Formats `f` in fixed-point notation with the fewest digits that parse
/// back to the same value.
pub fn from_float64(f: f64) -> String {
    if f.is_infinite() {
        return if f.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string();
    }
    if f.is_nan() {
        return "NaN".to_string();
    }
    // `Display` for f64 never switches to exponent form and emits the
    // shortest round-tripping digits.
    f.to_string()
}
