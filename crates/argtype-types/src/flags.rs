//! Flag-value primitives
//!
//! The shared parsers that built-in types delegate to. Each one reads the raw
//! value from a [`TypeInfo`] and reports failures with the canonical
//! invalid-value message for that occurrence.

use crate::TypeInfo;
use argtype_diagnostics::{ARG0002, ARG0003, ARG0004, ValidationError};
use log::trace;

/// Parse a finite number.
///
/// Surrounding whitespace is ignored. Accepts decimal and exponent notation
/// (`42`, `-1.5`, `.5`, `1e3`) and unsigned `0x`/`0o`/`0b` integers of any
/// width.
/// Empty input, NaN and infinities are rejected.
pub fn number(info: &TypeInfo) -> Result<f64, ValidationError> {
    trace!("parsing number {}", info);
    parse_finite(info.value().trim()).ok_or_else(|| info.invalid().with_code(ARG0002))
}

/// Parse a whole number that fits in an `i64`.
///
/// Accepts everything [`number`] accepts as long as the result has no
/// fractional part, so `1e3` and `2.0` are integers.
pub fn integer(info: &TypeInfo) -> Result<i64, ValidationError> {
    trace!("parsing integer {}", info);
    let raw = info.value().trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }
    if let Some(value) = parse_prefixed(raw) {
        return i64::try_from(value).map_err(|_| info.invalid().with_code(ARG0003));
    }
    match parse_finite(raw) {
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        Some(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(info.invalid().with_code(ARG0003)),
    }
}

/// Parse a boolean: `true`/`1` or `false`/`0`
pub fn boolean(info: &TypeInfo) -> Result<bool, ValidationError> {
    trace!("parsing boolean {}", info);
    match info.value() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(info.invalid().with_code(ARG0004)),
    }
}

/// Accept any text as-is
pub fn string(info: &TypeInfo) -> Result<String, ValidationError> {
    trace!("parsing string {}", info);
    Ok(info.value().to_string())
}

fn parse_finite(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    if let Some(value) = parse_prefixed(raw) {
        return Some(value as f64);
    }
    if let Some((radix, digits)) = split_prefix(raw) {
        return parse_radix_float(digits, radix).filter(|v| v.is_finite());
    }
    // f64::from_str also takes "inf"/"nan" spellings, which the finiteness
    // check rejects.
    if !raw.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn split_prefix(raw: &str) -> Option<(u32, &str)> {
    let (radix, digits) = match raw.get(..2)? {
        "0x" | "0X" => (16, &raw[2..]),
        "0o" | "0O" => (8, &raw[2..]),
        "0b" | "0B" => (2, &raw[2..]),
        _ => return None,
    };
    Some((radix, digits))
}

fn parse_prefixed(raw: &str) -> Option<u64> {
    let (radix, digits) = split_prefix(raw)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

// Prefixed literals wider than u64 still denote a (rounded) float.
fn parse_radix_float(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
