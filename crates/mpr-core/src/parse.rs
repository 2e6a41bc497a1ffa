//! Text → value conversion with partial-match position tracking.
//!
//! The scanner finds the longest valid numeral prefix itself and hands
//! only that cleaned prefix to the engine for correctly rounded
//! conversion. Trailing content never makes a parse fail: the caller
//! gets the converted prefix plus the offset of the first unconsumed
//! byte, and decides what to do with the remainder.
//!
//! Accepted syntax: optional ASCII whitespace, an optional sign, then
//! either a special token (`nan`, `inf`, `infinity`, case-insensitive)
//! or digits with at most one radix point and an optional exponent
//! (`e`/`E` for radices up to 10, `@` for any radix; the exponent is
//! always decimal). With radix 0 the radix is detected from a `0x`/`0b`
//! prefix, defaulting to 10.

use crate::errors::ParseRealError;
use crate::rounding::{RoundingMode, Ternary};
use crate::settings::Settings;
use crate::value::Real;
use crate::Precision;
use rug::float::Special;
use rug::Float;
use std::str::FromStr;

/// Outcome of a successful (possibly partial) parse.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The converted value, at the requested precision.
    pub value: Real,
    /// Rounding direction applied during conversion.
    pub ternary: Ternary,
    /// Byte offset of the first character the scanner did not consume;
    /// equals the input length when the whole string was a numeral.
    pub end_position: usize,
}

/// Parse the longest valid numeral prefix of `text`.
///
/// `radix` is `0` for prefix autodetection or an explicit value in
/// `2..=36`. Returns `None` for an empty input, an input with no valid
/// numeral prefix, or an unsupported radix. Trailing content after a
/// valid prefix is *not* an error; `end_position` reports where the
/// numeral stopped.
pub fn parse_radix(
    text: &str,
    radix: u32,
    prec: Precision,
    mode: RoundingMode,
) -> Option<ParseResult> {
    if radix != 0 && !(2..=36).contains(&radix) {
        return None;
    }
    let bytes = text.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    // Sign.
    let mut negative = false;
    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        negative = bytes[pos] == b'-';
        pos += 1;
    }

    // Special tokens.
    if let Some((token_len, is_nan)) = match_special(&text[pos..]) {
        let special = match (is_nan, negative) {
            (true, _) => Special::Nan,
            (false, false) => Special::Infinity,
            (false, true) => Special::NegInfinity,
        };
        let mut record = Float::with_val(prec, special);
        if is_nan && negative {
            record = -record;
        }
        return Some(ParseResult {
            value: Real::from_engine(record),
            ternary: Ternary::Exact,
            end_position: pos + token_len,
        });
    }

    // Radix autodetection from a 0x / 0b prefix.
    let mut radix = radix;
    let mut prefix_zero = None;
    if radix == 0 {
        radix = 10;
        if pos + 1 < bytes.len() && bytes[pos] == b'0' {
            match bytes[pos + 1] {
                b'x' | b'X' => {
                    prefix_zero = Some(pos);
                    radix = 16;
                    pos += 2;
                }
                b'b' | b'B' => {
                    prefix_zero = Some(pos);
                    radix = 2;
                    pos += 2;
                }
                _ => {}
            }
        }
    }

    // Mantissa: digits with at most one radix point. `pos` is left at
    // the byte after the last digit, so a trailing bare point is never
    // consumed.
    let mantissa_start = pos;
    let mut saw_digit = false;
    let mut saw_point = false;
    let mut after_last_digit = pos;
    while pos < bytes.len() {
        let b = bytes[pos];
        if digit_value(b).is_some_and(|d| d < radix) {
            saw_digit = true;
            pos += 1;
            after_last_digit = pos;
        } else if b == b'.' && !saw_point {
            saw_point = true;
            pos += 1;
        } else {
            break;
        }
    }
    let mantissa_end = after_last_digit;

    if !saw_digit {
        // A consumed `0x`/`0b` prefix with no digits after it falls
        // back to the literal zero before the prefix letter.
        if let Some(zero_pos) = prefix_zero {
            let body = if negative { "-0" } else { "0" };
            let (record, ord) = convert(body, 10, prec, mode)?;
            return Some(ParseResult {
                value: Real::from_engine(record),
                ternary: ord,
                end_position: zero_pos + 1,
            });
        }
        return None;
    }

    // Optional exponent, only directly after the last mantissa digit.
    let mut end = mantissa_end;
    if mantissa_end < bytes.len() {
        let marker = bytes[mantissa_end];
        let marker_ok = marker == b'@'
            || (radix <= 10 && (marker == b'e' || marker == b'E'));
        if marker_ok {
            let mut cursor = mantissa_end + 1;
            if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
                cursor += 1;
            }
            let exp_digits_start = cursor;
            while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
                cursor += 1;
            }
            if cursor > exp_digits_start {
                end = cursor;
            }
        }
    }

    // Reassemble the cleaned numeral the engine will see: sign, the
    // mantissa (with a leading zero restored in front of a bare point),
    // and the exponent.
    let mut cleaned = String::with_capacity(end - mantissa_start + 2);
    if negative {
        cleaned.push('-');
    }
    if bytes[mantissa_start] == b'.' {
        cleaned.push('0');
    }
    cleaned.push_str(&text[mantissa_start..mantissa_end]);
    cleaned.push_str(&text[mantissa_end..end]);

    let (record, ternary) = convert(&cleaned, radix, prec, mode)?;
    Some(ParseResult {
        value: Real::from_engine(record),
        ternary,
        end_position: end,
    })
}

/// Parse `text` requiring the whole string to be consumed (trailing
/// ASCII whitespace excepted).
pub fn parse_all(text: &str, radix: u32, prec: Precision, mode: RoundingMode) -> Option<Real> {
    let result = parse_radix(text, radix, prec, mode)?;
    if text.as_bytes()[result.end_position..]
        .iter()
        .all(|b| b.is_ascii_whitespace())
    {
        Some(result.value)
    } else {
        None
    }
}

impl FromStr for Real {
    type Err = ParseRealError;

    /// Whole-string parse with radix autodetection, at the process-wide
    /// default precision, rounding to nearest.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_all(
            s,
            0,
            Settings::instance().default_precision(),
            RoundingMode::Nearest,
        )
        .ok_or(ParseRealError)
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn convert(body: &str, radix: u32, prec: Precision, mode: RoundingMode) -> Option<(Float, Ternary)> {
    let incomplete = Float::parse_radix(body, radix as i32).ok()?;
    let (record, ord) = Float::with_val_round(prec, incomplete, mode.to_engine());
    Some((record, Ternary::from(ord)))
}

/// Case-insensitive special token at the start of `rest`; returns the
/// token length and whether it is NaN.
fn match_special(rest: &str) -> Option<(usize, bool)> {
    let lower: String = rest
        .chars()
        .take(8)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if lower.starts_with("infinity") {
        Some((8, false))
    } else if lower.starts_with("inf") {
        Some((3, false))
    } else if lower.starts_with("nan") {
        Some((3, true))
    } else {
        None
    }
}

fn digit_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'a'..=b'z' => Some((b - b'a') as u32 + 10),
        b'A'..=b'Z' => Some((b - b'A') as u32 + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::RoundingMode::Nearest;

    fn p(text: &str, radix: u32) -> Option<ParseResult> {
        parse_radix(text, radix, 53, Nearest)
    }

    #[test]
    fn plain_decimal() {
        let r = p("3.14159", 10).unwrap();
        assert_eq!(r.end_position, 7);
        assert!((r.value.to_f64() - 3.14159).abs() < 1e-12);
    }

    #[test]
    fn partial_match_reports_end_position() {
        let r = p("3.14159abc", 10).unwrap();
        assert_eq!(r.end_position, 7);
        let full = p("3.14159", 10).unwrap();
        assert_eq!(r.value, full.value);
    }

    #[test]
    fn leading_whitespace_is_counted() {
        let r = p("  42 ", 10).unwrap();
        assert_eq!(r.value.to_f64(), 42.0);
        assert_eq!(r.end_position, 4);
    }

    #[test]
    fn empty_and_invalid_inputs() {
        assert!(p("", 10).is_none());
        assert!(p("   ", 10).is_none());
        assert!(p("abc", 10).is_none());
        assert!(p("+", 10).is_none());
        assert!(p(".", 10).is_none());
        assert!(p("3", 1).is_none());
        assert!(p("3", 37).is_none());
    }

    #[test]
    fn radix_autodetection() {
        let r = p("0xff.8", 0).unwrap();
        assert_eq!(r.value.to_f64(), 255.5);
        assert_eq!(r.end_position, 6);

        let r = p("0b101", 0).unwrap();
        assert_eq!(r.value.to_f64(), 5.0);

        let r = p("-0x10", 0).unwrap();
        assert_eq!(r.value.to_f64(), -16.0);

        let r = p("42", 0).unwrap();
        assert_eq!(r.value.to_f64(), 42.0);
    }

    #[test]
    fn bare_prefix_falls_back_to_zero() {
        // "0x" with no hex digit is the numeral 0 followed by "xg".
        let r = p("0xg", 0).unwrap();
        assert!(r.value.is_zero());
        assert_eq!(r.end_position, 1);
    }

    #[test]
    fn explicit_radix_treats_prefix_letter_as_digit() {
        // With an explicit radix of 16, "0x" has no special meaning
        // and x is not a digit: the numeral is just "0".
        let r = p("0x10", 16).unwrap();
        assert!(r.value.is_zero());
        assert_eq!(r.end_position, 1);
    }

    #[test]
    fn exponents() {
        let r = p("2.5e3", 10).unwrap();
        assert_eq!(r.value.to_f64(), 2500.0);
        assert_eq!(r.end_position, 5);

        let r = p("2.5E-2", 10).unwrap();
        assert_eq!(r.value.to_f64(), 0.025);

        // A bare marker with no digits is trailing content.
        let r = p("3e", 10).unwrap();
        assert_eq!(r.value.to_f64(), 3.0);
        assert_eq!(r.end_position, 1);

        let r = p("3e+", 10).unwrap();
        assert_eq!(r.end_position, 1);

        // '@' works for any radix; 'e' is a digit above radix 10.
        let r = p("ff@1", 16).unwrap();
        assert_eq!(r.value.to_f64(), 4080.0);

        let r = p("1e1", 16).unwrap();
        assert_eq!(r.value.to_f64(), 481.0);
        assert_eq!(r.end_position, 3);
    }

    #[test]
    fn trailing_point_is_not_consumed() {
        let r = p("3.", 10).unwrap();
        assert_eq!(r.value.to_f64(), 3.0);
        assert_eq!(r.end_position, 1);

        let r = p("3.e5", 10).unwrap();
        assert_eq!(r.value.to_f64(), 3.0);
        assert_eq!(r.end_position, 1);
    }

    #[test]
    fn leading_point_parses() {
        let r = p(".5", 10).unwrap();
        assert_eq!(r.value.to_f64(), 0.5);
        assert_eq!(r.end_position, 2);

        let r = p("-.25", 10).unwrap();
        assert_eq!(r.value.to_f64(), -0.25);
    }

    #[test]
    fn special_tokens() {
        let r = p("inf", 10).unwrap();
        assert!(r.value.is_infinite());
        assert!(r.value.is_sign_positive());
        assert_eq!(r.end_position, 3);

        let r = p("-Infinity!", 10).unwrap();
        assert!(r.value.is_infinite());
        assert!(r.value.is_sign_negative());
        assert_eq!(r.end_position, 9);

        let r = p("NaN", 10).unwrap();
        assert!(r.value.is_nan());
        assert!(r.ternary.is_exact());
    }

    #[test]
    fn parse_reports_rounding_ternary() {
        // 0.1 is inexact in binary; some direction must be reported.
        let r = p("0.1", 10).unwrap();
        assert!(!r.ternary.is_exact());
        // 0.5 is exact.
        let r = p("0.5", 10).unwrap();
        assert!(r.ternary.is_exact());
    }

    #[test]
    fn requested_precision_is_respected() {
        let r = parse_radix("3.14159", 10, 113, Nearest).unwrap();
        assert_eq!(r.value.precision(), 113);
    }

    #[test]
    fn parse_all_requires_full_consumption() {
        assert!(parse_all("3.14  ", 10, 53, Nearest).is_some());
        assert!(parse_all("3.14x", 10, 53, Nearest).is_none());
        assert!(parse_all("", 10, 53, Nearest).is_none());
    }

    #[test]
    fn from_str_round_trips() {
        let x: Real = "255.5".parse().unwrap();
        assert_eq!(x.to_f64(), 255.5);
        let y: Real = "0x10".parse().unwrap();
        assert_eq!(y.to_f64(), 16.0);
        assert!("3.14junk".parse::<Real>().is_err());
    }
}
