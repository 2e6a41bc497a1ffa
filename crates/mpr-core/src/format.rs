//! Value → text rendering in arbitrary bases.
//!
//! The engine supplies a `(sign, digit string, exponent)` triple where
//! the value is `±0.d₁d₂… × radix^exp`; this module turns that triple
//! into positional ([`format_radix`]) or scientific ([`format_exp`])
//! notation. A negative exponent left-pads the fractional part with
//! exactly `|exp|` zero digits — they are what positions the first
//! significant digit and must never be dropped.
//!
//! Specials render as the fixed tokens `nan` / `inf` (`-nan` / `-inf`
//! when the sign bit is set), which the parsing engine recognizes
//! case-insensitively.

use crate::rounding::RoundingMode;
use crate::value::Real;
use std::fmt;

/// Render `value` in positional notation.
///
/// `digits` is the number of significant digits to produce; `0` means
/// "as many as needed to read the value back at its precision". With an
/// explicit digit count the engine's output is kept verbatim (trailing
/// zeros included); with `digits == 0` trailing fractional zeros are
/// trimmed.
///
/// # Panics
///
/// Panics if `radix` is outside `2..=36`.
pub fn format_radix(value: &Real, radix: u32, digits: usize, mode: RoundingMode) -> String {
    assert!(
        (2..=36).contains(&radix),
        "radix {radix} outside supported range 2..=36"
    );
    if let Some(special) = special_token(value) {
        return special;
    }
    if value.is_zero() {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }
    let (neg, ds, exp) = triple(value, radix, digits, mode);
    positional(neg, &ds, exp, digits == 0)
}

/// Render `value` in scientific notation: `d.dd…e±k`, with `@` as the
/// exponent marker for radices above 10 (where `e` is a digit).
///
/// # Panics
///
/// Panics if `radix` is outside `2..=36`.
pub fn format_exp(value: &Real, radix: u32, digits: usize, mode: RoundingMode) -> String {
    assert!(
        (2..=36).contains(&radix),
        "radix {radix} outside supported range 2..=36"
    );
    if let Some(special) = special_token(value) {
        return special;
    }
    let marker = if radix <= 10 { 'e' } else { '@' };
    if value.is_zero() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}0{marker}0");
    }
    let (neg, ds, exp) = triple(value, radix, digits, mode);
    let mut out = String::with_capacity(ds.len() + 8);
    if neg {
        out.push('-');
    }
    let mut digits_iter = ds.chars();
    // The triple always carries at least one digit.
    if let Some(first) = digits_iter.next() {
        out.push(first);
    }
    let rest: String = digits_iter.collect();
    let rest = if digits == 0 {
        rest.trim_end_matches('0').to_owned()
    } else {
        rest
    };
    if !rest.is_empty() {
        out.push('.');
        out.push_str(&rest);
    }
    out.push(marker);
    out.push_str(&(exp - 1).to_string());
    out
}

/// Render `value` in whichever of the two notations reads shorter:
/// positional while the exponent stays in a moderate window, scientific
/// outside it (the `%g`-style selection rule).
///
/// # Panics
///
/// Panics if `radix` is outside `2..=36`.
pub fn format_shortest(value: &Real, radix: u32, digits: usize, mode: RoundingMode) -> String {
    assert!(
        (2..=36).contains(&radix),
        "radix {radix} outside supported range 2..=36"
    );
    if let Some(special) = special_token(value) {
        return special;
    }
    if value.is_zero() {
        return format_radix(value, radix, digits, mode);
    }
    let (_, ds, exp) = triple(value, radix, digits, mode);
    let significant = if digits == 0 { ds.len() } else { digits };
    let adjusted = exp - 1;
    if adjusted < -4 || adjusted >= significant.max(6) as i32 {
        format_exp(value, radix, digits, mode)
    } else {
        format_radix(value, radix, digits, mode)
    }
}

impl Real {
    /// Positional rendering at nearest rounding; see [`format_radix`].
    pub fn to_string_radix(&self, radix: u32, digits: usize) -> String {
        format_radix(self, radix, digits, RoundingMode::Nearest)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_radix(self, 10, 0, RoundingMode::Nearest))
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn special_token(value: &Real) -> Option<String> {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_nan() {
        return Some(format!("{sign}nan"));
    }
    if value.is_infinite() {
        return Some(format!("{sign}inf"));
    }
    None
}

/// Engine digit triple for a finite non-zero value: the value equals
/// `±0.digits × radix^exp`.
fn triple(value: &Real, radix: u32, digits: usize, mode: RoundingMode) -> (bool, String, i32) {
    // The engine's minimum explicit digit count is two.
    let num_digits = match digits {
        0 => None,
        1 => Some(2),
        n => Some(n),
    };
    let (neg, ds, exp) = value
        .engine()
        .to_sign_string_exp_round(radix as i32, num_digits, mode.to_engine());
    let exp = exp.expect("finite non-zero value must carry an exponent");
    (neg, ds, exp)
}

fn positional(neg: bool, ds: &str, exp: i32, trim: bool) -> String {
    let mut body = if exp <= 0 {
        let mut s = String::with_capacity(ds.len() + exp.unsigned_abs() as usize + 2);
        s.push_str("0.");
        for _ in 0..exp.unsigned_abs() {
            s.push('0');
        }
        s.push_str(ds);
        s
    } else if exp as usize >= ds.len() {
        let mut s = String::with_capacity(exp as usize);
        s.push_str(ds);
        for _ in 0..(exp as usize - ds.len()) {
            s.push('0');
        }
        s
    } else {
        let (int_part, frac_part) = ds.split_at(exp as usize);
        format!("{int_part}.{frac_part}")
    };
    if trim && body.contains('.') {
        while body.ends_with('0') {
            body.pop();
        }
        if body.ends_with('.') {
            body.pop();
        }
    }
    if neg {
        format!("-{body}")
    } else {
        body
    }
}
