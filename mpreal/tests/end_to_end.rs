//! End-to-end scenarios across the façade: parse → arithmetic →
//! format, stream input, and the documented edge-case policies.

use approx::assert_abs_diff_eq;
use mpreal::{
    parse_all, parse_radix, read_real, write_formatted, Real, RoundingMode, Settings, Ternary,
};
use std::fs::File;
use std::io::Write;

const NEAREST: RoundingMode = RoundingMode::Nearest;

#[test]
fn parse_compute_format() {
    let a = parse_all("3.14", 10, 113, NEAREST).unwrap();
    let b = parse_all("2.71", 10, 113, NEAREST).unwrap();
    let (sum, _) = a.add(&b, NEAREST);
    assert_eq!(sum.precision(), 113);
    assert_abs_diff_eq!(sum.to_f64(), 5.85, epsilon = 1e-12);
    // 3.14 and 2.71 are binary-inexact, so the 113-bit sum sits within
    // a few units in the last place of 5.85 on either side.
    assert!(sum.to_string_radix(10, 3).starts_with("5.85"));
}

#[test]
fn documented_spec_scenarios() {
    // 6.0 / 2.0 → 3.0 exactly.
    let (q, t) = Real::with_val(53, 6.0).div(&Real::with_val(53, 2.0), NEAREST);
    assert_eq!(q.to_f64(), 3.0);
    assert_eq!(t, Ternary::Exact);

    // parse("0xff.8", base 0) → 255.5.
    let r = parse_radix("0xff.8", 0, 53, NEAREST).unwrap();
    assert_eq!(r.value.to_f64(), 255.5);

    // parse("", base 10) → absent.
    assert!(parse_radix("", 10, 53, NEAREST).is_none());

    // 3.14 / 0.0 is NaN or a signed infinity, never finite.
    let (q, _) = Real::with_val(53, 3.14).div(&Real::new(53), NEAREST);
    assert!(!q.is_finite());

    // log(−1) → not-a-number error; log(0) → divide-by-zero error.
    assert!(Real::with_val(53, -1.0)
        .ln(NEAREST)
        .unwrap_err()
        .is_nan());
    assert!(Real::new(53).ln(NEAREST).unwrap_err().is_divide_by_zero());
}

#[test]
fn partial_parse_leaves_remainder_inspectable() {
    let text = "3.14159abc";
    let r = parse_radix(text, 10, 53, NEAREST).unwrap();
    assert_eq!(&text[r.end_position..], "abc");
    let clean = parse_radix("3.14159", 10, 53, NEAREST).unwrap();
    assert_eq!(r.value, clean.value);
}

#[test]
fn default_precision_flows_through_from_str() {
    let settings = Settings::instance();
    let x: Real = "1.5".parse().unwrap();
    assert_eq!(x.precision(), settings.default_precision());
}

#[test]
fn stream_and_printf_round_trip_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("value.txt");

    let mut out = File::create(&path).unwrap();
    let value = Real::with_val(64, 255.5);
    let written = write_formatted(&mut out, "%f\n", &value, NEAREST).unwrap();
    assert_eq!(written, "255.5\n".len());
    out.flush().unwrap();
    drop(out);

    let mut input = File::open(&path).unwrap();
    let r = read_real(&mut input, 10, 64, NEAREST).unwrap();
    assert_eq!(r.value, value);
}

#[test]
fn copies_never_observe_mutation() {
    let mut a = Real::with_val(80, 1.0);
    let b = a.clone();
    assert!(a.shares_storage_with(&b));
    a += 1.0;
    assert!(!a.shares_storage_with(&b));
    assert_eq!(a.to_f64(), 2.0);
    assert_eq!(b.to_f64(), 1.0);
    assert_eq!(b.precision(), 80);
}
