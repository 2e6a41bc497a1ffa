//! Arithmetic surface of [`Real`]: dual pure/in-place forms, reverse
//! operations, power-of-two scaling, and the integer rounding family.
//!
//! The in-place forms are the primitives — they acquire unique storage
//! and hand the engine a destination record. Every pure form is the
//! corresponding in-place primitive applied to a clone of the receiver,
//! so the two forms cannot diverge numerically.
//!
//! Edge cases follow the engine's IEEE-754-derived semantics: signed
//! infinities add and subtract as expected, `∞ − ∞`, `0 × ∞` and any
//! NaN operand give NaN, and division by zero gives NaN or a signed
//! infinity — never a finite number.

use crate::rounding::{RoundingMode, Ternary};
use crate::value::Real;
use crate::Precision;
use rug::ops::{
    AddAssignRound, AssignRound, DivAssignRound, DivFromRound, MulAssignRound, NegAssign,
    SubAssignRound, SubFromRound,
};
use rug::Float;
use std::cmp::Ordering;

impl Real {
    // ── In-place primitives ──────────────────────────────────────────────────

    /// `self += rhs`, rounded under `mode`. `rhs` is never touched.
    pub fn add_mut(&mut self, rhs: &Real, mode: RoundingMode) -> Ternary {
        let rnd = mode.to_engine();
        Ternary::from(self.cell.make_unique().add_assign_round(rhs.engine(), rnd))
    }

    /// `self -= rhs`, rounded under `mode`.
    pub fn sub_mut(&mut self, rhs: &Real, mode: RoundingMode) -> Ternary {
        let rnd = mode.to_engine();
        Ternary::from(self.cell.make_unique().sub_assign_round(rhs.engine(), rnd))
    }

    /// `self *= rhs`, rounded under `mode`.
    pub fn mul_mut(&mut self, rhs: &Real, mode: RoundingMode) -> Ternary {
        let rnd = mode.to_engine();
        Ternary::from(self.cell.make_unique().mul_assign_round(rhs.engine(), rnd))
    }

    /// `self /= rhs`, rounded under `mode`.
    pub fn div_mut(&mut self, rhs: &Real, mode: RoundingMode) -> Ternary {
        let rnd = mode.to_engine();
        Ternary::from(self.cell.make_unique().div_assign_round(rhs.engine(), rnd))
    }

    /// Flip the sign in place. Always exact, for every class of value
    /// including NaN and the infinities; `mode` cannot influence the
    /// result.
    pub fn negate_mut(&mut self, _mode: RoundingMode) -> Ternary {
        self.cell.make_unique().neg_assign();
        Ternary::Exact
    }

    /// Clear the sign in place. Always exact.
    pub fn abs_mut(&mut self, _mode: RoundingMode) -> Ternary {
        self.cell.make_unique().abs_mut();
        Ternary::Exact
    }

    /// `self *= 2^exp` in place. Exact at unchanged precision, so the
    /// rounding mode cannot influence the result.
    pub fn mul_exp2_mut(&mut self, exp: i32, _mode: RoundingMode) -> Ternary {
        let record = self.cell.make_unique();
        if exp >= 0 {
            *record <<= exp as u32;
        } else {
            *record >>= exp.unsigned_abs();
        }
        Ternary::Exact
    }

    /// `self /= 2^exp` in place. Exact at unchanged precision.
    pub fn div_exp2_mut(&mut self, exp: i32, _mode: RoundingMode) -> Ternary {
        let record = self.cell.make_unique();
        if exp >= 0 {
            *record >>= exp as u32;
        } else {
            *record <<= exp.unsigned_abs();
        }
        Ternary::Exact
    }

    // ── Pure forms ───────────────────────────────────────────────────────────

    /// `self + rhs` as a new value at `self`'s precision. Neither
    /// operand is mutated.
    #[must_use]
    pub fn add(&self, rhs: &Real, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.add_mut(rhs, mode);
        (out, t)
    }

    /// `self − rhs` as a new value at `self`'s precision.
    #[must_use]
    pub fn sub(&self, rhs: &Real, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.sub_mut(rhs, mode);
        (out, t)
    }

    /// `self × rhs` as a new value at `self`'s precision.
    #[must_use]
    pub fn mul(&self, rhs: &Real, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.mul_mut(rhs, mode);
        (out, t)
    }

    /// `self ÷ rhs` as a new value at `self`'s precision.
    #[must_use]
    pub fn div(&self, rhs: &Real, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.div_mut(rhs, mode);
        (out, t)
    }

    /// `−self` as a new value. Always exact.
    #[must_use]
    pub fn negated(&self, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.negate_mut(mode);
        (out, t)
    }

    /// `|self|` as a new value. Always exact.
    #[must_use]
    pub fn abs(&self, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.abs_mut(mode);
        (out, t)
    }

    /// `self × 2^exp` as a new value. Always exact.
    #[must_use]
    pub fn mul_exp2(&self, exp: i32, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.mul_exp2_mut(exp, mode);
        (out, t)
    }

    /// `self ÷ 2^exp` as a new value. Always exact.
    #[must_use]
    pub fn div_exp2(&self, exp: i32, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.div_exp2_mut(exp, mode);
        (out, t)
    }

    // ── Reverse operations (scalar OP value) ─────────────────────────────────

    /// Overwrite `self` with `lhs − rhs`, rounded to `self`'s
    /// precision under `mode`.
    pub fn assign_sub_from(&mut self, lhs: i32, rhs: &Real, mode: RoundingMode) -> Ternary {
        let rnd = mode.to_engine();
        Ternary::from(self.cell.make_unique().assign_round(lhs - rhs.engine(), rnd))
    }

    /// Overwrite `self` with `lhs ÷ rhs`, rounded to `self`'s
    /// precision under `mode`.
    pub fn assign_div_from(&mut self, lhs: i32, rhs: &Real, mode: RoundingMode) -> Ternary {
        let rnd = mode.to_engine();
        Ternary::from(self.cell.make_unique().assign_round(lhs / rhs.engine(), rnd))
    }

    /// `self = lhs − self` in place.
    pub fn sub_from_mut(&mut self, lhs: i32, mode: RoundingMode) -> Ternary {
        let rnd = mode.to_engine();
        Ternary::from(self.cell.make_unique().sub_from_round(lhs, rnd))
    }

    /// `self = lhs ÷ self` in place.
    pub fn div_from_mut(&mut self, lhs: i32, mode: RoundingMode) -> Ternary {
        let rnd = mode.to_engine();
        Ternary::from(self.cell.make_unique().div_from_round(lhs, rnd))
    }

    // ── Integer rounding family ──────────────────────────────────────────────
    //
    // These are defined to be independent of the supplied rounding
    // mode: the numeric result is identical for every mode. The ternary
    // reports the direction the value moved relative to the original
    // (NaN and infinities are unchanged and report Exact).

    /// Round down to the nearest integer, in place.
    pub fn floor_mut(&mut self, _mode: RoundingMode) -> Ternary {
        if !self.is_finite() || self.is_integer() {
            return Ternary::Exact;
        }
        self.cell.make_unique().floor_mut();
        Ternary::Below
    }

    /// Round up to the nearest integer, in place.
    pub fn ceil_mut(&mut self, _mode: RoundingMode) -> Ternary {
        if !self.is_finite() || self.is_integer() {
            return Ternary::Exact;
        }
        self.cell.make_unique().ceil_mut();
        Ternary::Above
    }

    /// Round towards zero to the nearest integer, in place.
    pub fn trunc_mut(&mut self, _mode: RoundingMode) -> Ternary {
        if !self.is_finite() || self.is_integer() {
            return Ternary::Exact;
        }
        let toward_zero_is_down = self.is_sign_positive();
        self.cell.make_unique().trunc_mut();
        if toward_zero_is_down {
            Ternary::Below
        } else {
            Ternary::Above
        }
    }

    /// Round to the nearest integer, ties away from zero, in place.
    pub fn round_nearest_mut(&mut self, _mode: RoundingMode) -> Ternary {
        if !self.is_finite() || self.is_integer() {
            return Ternary::Exact;
        }
        let before = self.clone();
        self.cell.make_unique().round_mut();
        match self.engine().partial_cmp(before.engine()) {
            Some(Ordering::Less) => Ternary::Below,
            Some(Ordering::Greater) => Ternary::Above,
            _ => Ternary::Exact,
        }
    }

    /// Floor as a new value; see [`Real::floor_mut`].
    #[must_use]
    pub fn floor(&self, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.floor_mut(mode);
        (out, t)
    }

    /// Ceiling as a new value; see [`Real::ceil_mut`].
    #[must_use]
    pub fn ceil(&self, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.ceil_mut(mode);
        (out, t)
    }

    /// Truncation as a new value; see [`Real::trunc_mut`].
    #[must_use]
    pub fn trunc(&self, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.trunc_mut(mode);
        (out, t)
    }

    /// Nearest integer (ties away from zero) as a new value; see
    /// [`Real::round_nearest_mut`].
    #[must_use]
    pub fn round_nearest(&self, mode: RoundingMode) -> (Real, Ternary) {
        let mut out = self.clone();
        let t = out.round_nearest_mut(mode);
        (out, t)
    }
}

// ── Free reverse forms at an explicit result precision ────────────────────────

/// `lhs − value` as a new value at the supplied result precision.
pub fn sub_from(lhs: i32, value: &Real, prec: Precision, mode: RoundingMode) -> (Real, Ternary) {
    let (f, ord) = Float::with_val_round(prec, lhs - value.engine(), mode.to_engine());
    (Real::from_engine(f), Ternary::from(ord))
}

/// `lhs ÷ value` as a new value at the supplied result precision.
pub fn div_from(lhs: i32, value: &Real, prec: Precision, mode: RoundingMode) -> (Real, Ternary) {
    let (f, ord) = Float::with_val_round(prec, lhs / value.engine(), mode.to_engine());
    (Real::from_engine(f), Ternary::from(ord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::RoundingMode::Nearest;

    fn r(v: f64) -> Real {
        Real::with_val(53, v)
    }

    #[test]
    fn pure_and_in_place_agree() {
        let a = r(3.14);
        let b = r(2.71);
        let (sum, t_pure) = a.add(&b, Nearest);

        let mut c = a.clone();
        let t_inplace = c.add_mut(&b, Nearest);

        assert_eq!(sum, c);
        assert_eq!(t_pure, t_inplace);
        assert!((sum.to_f64() - 5.85).abs() < 1e-12);
    }

    #[test]
    fn pure_forms_leave_operands_untouched() {
        let a = r(3.14);
        let b = r(2.71);
        let a_image = crate::format::format_radix(&a, 16, 0, Nearest);
        let b_image = crate::format::format_radix(&b, 16, 0, Nearest);

        let _ = a.add(&b, Nearest);
        let _ = a.sub(&b, Nearest);
        let _ = a.mul(&b, Nearest);
        let _ = a.div(&b, Nearest);
        let _ = a.negated(Nearest);
        let _ = a.abs(Nearest);

        assert_eq!(crate::format::format_radix(&a, 16, 0, Nearest), a_image);
        assert_eq!(crate::format::format_radix(&b, 16, 0, Nearest), b_image);
        assert_eq!(a.precision(), 53);
        assert_eq!(b.precision(), 53);
    }

    #[test]
    fn result_takes_receiver_precision() {
        let wide = Real::with_val(128, 1.0);
        let narrow = Real::with_val(24, 3.0);
        let (out, _) = wide.add(&narrow, Nearest);
        assert_eq!(out.precision(), 128);
        let (out, _) = narrow.add(&wide, Nearest);
        assert_eq!(out.precision(), 24);
    }

    #[test]
    fn exactness_law() {
        let candidates = [
            r(3.5),
            r(-0.75),
            Real::new(53),
            Real::infinity(53),
            Real::neg_infinity(53),
            Real::nan(53),
        ];
        let one = r(1.0);
        for mode in RoundingMode::ALL {
            for x in &candidates {
                assert!(x.negated(mode).1.is_exact());
                assert!(x.abs(mode).1.is_exact());
                assert!(x.sub(x, mode).1.is_exact());
                assert!(x.mul(&one, mode).1.is_exact());
                assert!(x.div(&one, mode).1.is_exact());
            }
        }
    }

    #[test]
    fn division_semantics() {
        let (q, t) = r(6.0).div(&r(2.0), Nearest);
        assert_eq!(q.to_f64(), 3.0);
        assert!(t.is_exact());

        // Division by zero never produces a finite value.
        let (q, _) = r(3.14).div(&r(0.0), Nearest);
        assert!(!q.is_finite());

        let (q, _) = r(0.0).div(&r(0.0), Nearest);
        assert!(q.is_nan());
    }

    #[test]
    fn special_value_arithmetic() {
        let inf = Real::infinity(53);
        let (s, _) = inf.add(&r(1.0), Nearest);
        assert!(s.is_infinite() && s.is_sign_positive());

        let (d, _) = inf.sub(&inf, Nearest);
        assert!(d.is_nan());

        let (p, _) = Real::new(53).mul(&inf, Nearest);
        assert!(p.is_nan());

        let (n, _) = Real::nan(53).add(&r(1.0), Nearest);
        assert!(n.is_nan());
    }

    #[test]
    fn scaling_is_exact() {
        let x = r(3.25);
        let (y, t) = x.mul_exp2(4, Nearest);
        assert_eq!(y.to_f64(), 52.0);
        assert!(t.is_exact());

        let (z, t) = x.div_exp2(2, Nearest);
        assert_eq!(z.to_f64(), 0.8125);
        assert!(t.is_exact());

        let (w, _) = x.mul_exp2(-2, Nearest);
        assert_eq!(w.to_f64(), 0.8125);
    }

    #[test]
    fn reverse_operations() {
        let x = r(4.0);
        let (d, t) = sub_from(10, &x, 53, Nearest);
        assert_eq!(d.to_f64(), 6.0);
        assert!(t.is_exact());

        let (q, t) = div_from(1, &x, 53, Nearest);
        assert_eq!(q.to_f64(), 0.25);
        assert!(t.is_exact());

        let (q, _) = div_from(1, &r(3.0), 64, Nearest);
        assert_eq!(q.precision(), 64);

        let mut y = r(4.0);
        y.sub_from_mut(10, Nearest);
        assert_eq!(y.to_f64(), 6.0);

        let mut z = r(4.0);
        z.div_from_mut(1, Nearest);
        assert_eq!(z.to_f64(), 0.25);

        let mut w = Real::new(53);
        w.assign_sub_from(7, &x, Nearest);
        assert_eq!(w.to_f64(), 3.0);
        w.assign_div_from(8, &x, Nearest);
        assert_eq!(w.to_f64(), 2.0);
    }

    #[test]
    fn floor_family_ignores_mode() {
        let cases = [3.7, -3.7, 2.5, -2.5, 4.0, -0.0, 0.3];
        for &v in &cases {
            let x = r(v);
            let reference = x.floor(RoundingMode::Nearest).0;
            for mode in RoundingMode::ALL {
                assert_eq!(x.floor(mode).0, reference, "floor({v}) under {mode:?}");
                assert_eq!(x.ceil(mode).0, x.ceil(RoundingMode::Nearest).0);
                assert_eq!(x.trunc(mode).0, x.trunc(RoundingMode::Nearest).0);
                assert_eq!(
                    x.round_nearest(mode).0,
                    x.round_nearest(RoundingMode::Nearest).0
                );
            }
        }
    }

    #[test]
    fn floor_family_values_and_ternaries() {
        let x = r(3.7);
        let (f, t) = x.floor(Nearest);
        assert_eq!(f.to_f64(), 3.0);
        assert_eq!(t, Ternary::Below);

        let (c, t) = x.ceil(Nearest);
        assert_eq!(c.to_f64(), 4.0);
        assert_eq!(t, Ternary::Above);

        let neg = r(-3.7);
        let (tr, t) = neg.trunc(Nearest);
        assert_eq!(tr.to_f64(), -3.0);
        assert_eq!(t, Ternary::Above);

        let (rn, t) = neg.round_nearest(Nearest);
        assert_eq!(rn.to_f64(), -4.0);
        assert_eq!(t, Ternary::Below);

        let (i, t) = r(5.0).floor(Nearest);
        assert_eq!(i.to_f64(), 5.0);
        assert!(t.is_exact());

        let (n, t) = Real::nan(53).floor(Nearest);
        assert!(n.is_nan());
        assert!(t.is_exact());
    }
}
