//! Partial transcendental functions and the dual-result sine/cosine.
//!
//! These are the operations that can be asked for an argument outside
//! their real domain. Instead of quietly producing NaN they fail with a
//! classified [`DomainError`] before the engine is invoked, mirroring
//! the engine's NaN and divide-by-zero flags:
//!
//! * an argument outside the domain (log of a negative number,
//!   `acosh(x)` for `x < 1`, `atanh(x)` for `|x| > 1`, any NaN
//!   argument) → [`DomainError::NotANumber`];
//! * an argument at a pole (log of zero, `atanh(±1)`) →
//!   [`DomainError::DivideByZero`].
//!
//! The receiver is never mutated when a function fails.

use crate::errors::{DomainError, Result};
use crate::rounding::{RoundingMode, Ternary};
use crate::value::Real;
use rug::Float;
use std::cmp::Ordering;

impl Real {
    fn check_not_nan(&self) -> Result<()> {
        if self.is_nan() {
            Err(DomainError::NotANumber)
        } else {
            Ok(())
        }
    }

    /// Log family: negative arguments are outside the real domain,
    /// zero is a pole.
    fn check_log(&self) -> Result<()> {
        self.check_not_nan()?;
        if self.is_zero() {
            return Err(DomainError::DivideByZero);
        }
        if self.is_sign_negative() {
            return Err(DomainError::NotANumber);
        }
        Ok(())
    }

    fn check_sqrt(&self) -> Result<()> {
        self.check_not_nan()?;
        // sqrt(−0) is −0; only negative non-zero arguments fail.
        if self.is_sign_negative() && !self.is_zero() {
            return Err(DomainError::NotANumber);
        }
        Ok(())
    }

    fn check_acosh(&self) -> Result<()> {
        self.check_not_nan()?;
        if self.engine().partial_cmp(&1i32) == Some(Ordering::Less) {
            return Err(DomainError::NotANumber);
        }
        Ok(())
    }

    fn check_atanh(&self) -> Result<()> {
        self.check_not_nan()?;
        let e = self.engine();
        if e.partial_cmp(&1i32) == Some(Ordering::Greater)
            || e.partial_cmp(&-1i32) == Some(Ordering::Less)
        {
            return Err(DomainError::NotANumber);
        }
        if *e == 1i32 || *e == -1i32 {
            return Err(DomainError::DivideByZero);
        }
        Ok(())
    }

    /// Natural logarithm, in place.
    pub fn ln_mut(&mut self, mode: RoundingMode) -> Result<Ternary> {
        self.check_log()?;
        Ok(Ternary::from(self.cell.make_unique().ln_round(mode.to_engine())))
    }

    /// Natural logarithm as a new value at `self`'s precision.
    pub fn ln(&self, mode: RoundingMode) -> Result<(Real, Ternary)> {
        let mut out = self.clone();
        let t = out.ln_mut(mode)?;
        Ok((out, t))
    }

    /// Base-2 logarithm, in place.
    pub fn log2_mut(&mut self, mode: RoundingMode) -> Result<Ternary> {
        self.check_log()?;
        Ok(Ternary::from(self.cell.make_unique().log2_round(mode.to_engine())))
    }

    /// Base-2 logarithm as a new value.
    pub fn log2(&self, mode: RoundingMode) -> Result<(Real, Ternary)> {
        let mut out = self.clone();
        let t = out.log2_mut(mode)?;
        Ok((out, t))
    }

    /// Base-10 logarithm, in place.
    pub fn log10_mut(&mut self, mode: RoundingMode) -> Result<Ternary> {
        self.check_log()?;
        Ok(Ternary::from(self.cell.make_unique().log10_round(mode.to_engine())))
    }

    /// Base-10 logarithm as a new value.
    pub fn log10(&self, mode: RoundingMode) -> Result<(Real, Ternary)> {
        let mut out = self.clone();
        let t = out.log10_mut(mode)?;
        Ok((out, t))
    }

    /// Square root, in place.
    pub fn sqrt_mut(&mut self, mode: RoundingMode) -> Result<Ternary> {
        self.check_sqrt()?;
        Ok(Ternary::from(self.cell.make_unique().sqrt_round(mode.to_engine())))
    }

    /// Square root as a new value.
    pub fn sqrt(&self, mode: RoundingMode) -> Result<(Real, Ternary)> {
        let mut out = self.clone();
        let t = out.sqrt_mut(mode)?;
        Ok((out, t))
    }

    /// Exponential, in place. Fails only for a NaN argument.
    pub fn exp_mut(&mut self, mode: RoundingMode) -> Result<Ternary> {
        self.check_not_nan()?;
        Ok(Ternary::from(self.cell.make_unique().exp_round(mode.to_engine())))
    }

    /// Exponential as a new value.
    pub fn exp(&self, mode: RoundingMode) -> Result<(Real, Ternary)> {
        let mut out = self.clone();
        let t = out.exp_mut(mode)?;
        Ok((out, t))
    }

    /// Inverse hyperbolic sine, in place. Fails only for a NaN
    /// argument (the function is total over the reals).
    pub fn asinh_mut(&mut self, mode: RoundingMode) -> Result<Ternary> {
        self.check_not_nan()?;
        Ok(Ternary::from(self.cell.make_unique().asinh_round(mode.to_engine())))
    }

    /// Inverse hyperbolic sine as a new value.
    pub fn asinh(&self, mode: RoundingMode) -> Result<(Real, Ternary)> {
        let mut out = self.clone();
        let t = out.asinh_mut(mode)?;
        Ok((out, t))
    }

    /// Inverse hyperbolic cosine, in place.
    pub fn acosh_mut(&mut self, mode: RoundingMode) -> Result<Ternary> {
        self.check_acosh()?;
        Ok(Ternary::from(self.cell.make_unique().acosh_round(mode.to_engine())))
    }

    /// Inverse hyperbolic cosine as a new value.
    pub fn acosh(&self, mode: RoundingMode) -> Result<(Real, Ternary)> {
        let mut out = self.clone();
        let t = out.acosh_mut(mode)?;
        Ok((out, t))
    }

    /// Inverse hyperbolic tangent, in place.
    pub fn atanh_mut(&mut self, mode: RoundingMode) -> Result<Ternary> {
        self.check_atanh()?;
        Ok(Ternary::from(self.cell.make_unique().atanh_round(mode.to_engine())))
    }

    /// Inverse hyperbolic tangent as a new value.
    pub fn atanh(&self, mode: RoundingMode) -> Result<(Real, Ternary)> {
        let mut out = self.clone();
        let t = out.atanh_mut(mode)?;
        Ok((out, t))
    }

    /// Simultaneous sine and cosine at `self`'s precision.
    ///
    /// Total: NaN and infinite arguments produce NaN results in-band.
    /// The two rounding directions are packed into one integer with
    /// [`Ternary::encode_pair`].
    pub fn sin_cos(&self, mode: RoundingMode) -> (Real, Real, i32) {
        let mut sin = self.clone();
        let mut cos = Float::new(self.precision());
        let (t_sin, t_cos) = sin
            .cell
            .make_unique()
            .sin_cos_round(&mut cos, mode.to_engine());
        (
            sin,
            Real::from_engine(cos),
            Ternary::encode_pair(Ternary::from(t_sin), Ternary::from(t_cos)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::RoundingMode::Nearest;
    use approx::assert_abs_diff_eq;

    fn r(v: f64) -> Real {
        Real::with_val(53, v)
    }

    #[test]
    fn log_of_negative_is_nan_error() {
        let err = r(-1.0).ln(Nearest).unwrap_err();
        assert!(err.is_nan());
        assert!(r(-2.5).log2(Nearest).is_err());
        assert!(r(-2.5).log10(Nearest).is_err());
    }

    #[test]
    fn log_of_zero_is_divide_by_zero_error() {
        let err = r(0.0).ln(Nearest).unwrap_err();
        assert!(err.is_divide_by_zero());
        let err = Real::neg_zero(53).ln(Nearest).unwrap_err();
        assert!(err.is_divide_by_zero());
    }

    #[test]
    fn log_values() {
        let (l, _) = r(std::f64::consts::E).ln(Nearest).unwrap();
        assert_abs_diff_eq!(l.to_f64(), 1.0, epsilon = 1e-12);

        let (l, t) = r(8.0).log2(Nearest).unwrap();
        assert_eq!(l.to_f64(), 3.0);
        assert!(t.is_exact());

        let (l, _) = r(1000.0).log10(Nearest).unwrap();
        assert_abs_diff_eq!(l.to_f64(), 3.0, epsilon = 1e-12);

        let (l, t) = Real::infinity(53).ln(Nearest).unwrap();
        assert!(l.is_infinite());
        assert!(t.is_exact());
    }

    #[test]
    fn receiver_unchanged_on_error() {
        let mut x = r(-1.0);
        let copy = x.clone();
        assert!(x.ln_mut(Nearest).is_err());
        assert!(x.shares_storage_with(&copy));
        assert_eq!(x.to_f64(), -1.0);
    }

    #[test]
    fn nan_argument_is_nan_error_everywhere() {
        let nan = Real::nan(53);
        assert!(nan.ln(Nearest).unwrap_err().is_nan());
        assert!(nan.log2(Nearest).unwrap_err().is_nan());
        assert!(nan.sqrt(Nearest).unwrap_err().is_nan());
        assert!(nan.exp(Nearest).unwrap_err().is_nan());
        assert!(nan.asinh(Nearest).unwrap_err().is_nan());
        assert!(nan.acosh(Nearest).unwrap_err().is_nan());
        assert!(nan.atanh(Nearest).unwrap_err().is_nan());
    }

    #[test]
    fn sqrt_domain() {
        let (s, t) = r(9.0).sqrt(Nearest).unwrap();
        assert_eq!(s.to_f64(), 3.0);
        assert!(t.is_exact());

        let (s, _) = Real::neg_zero(53).sqrt(Nearest).unwrap();
        assert!(s.is_zero());

        assert!(r(-4.0).sqrt(Nearest).unwrap_err().is_nan());
    }

    #[test]
    fn inverse_hyperbolic_domains() {
        assert!(r(0.5).acosh(Nearest).unwrap_err().is_nan());
        let (a, _) = r(1.0).acosh(Nearest).unwrap();
        assert_eq!(a.to_f64(), 0.0);

        assert!(r(2.0).atanh(Nearest).unwrap_err().is_nan());
        assert!(r(-2.0).atanh(Nearest).unwrap_err().is_nan());
        assert!(r(1.0).atanh(Nearest).unwrap_err().is_divide_by_zero());
        assert!(r(-1.0).atanh(Nearest).unwrap_err().is_divide_by_zero());

        let (a, _) = r(0.5).atanh(Nearest).unwrap();
        assert_abs_diff_eq!(a.to_f64(), 0.5f64.atanh(), epsilon = 1e-12);

        let (a, _) = r(-3.0).asinh(Nearest).unwrap();
        assert_abs_diff_eq!(a.to_f64(), (-3.0f64).asinh(), epsilon = 1e-12);
    }

    #[test]
    fn exp_values() {
        let (e, t) = r(0.0).exp(Nearest).unwrap();
        assert_eq!(e.to_f64(), 1.0);
        assert!(t.is_exact());

        let (e, _) = Real::neg_infinity(53).exp(Nearest).unwrap();
        assert!(e.is_zero());
    }

    #[test]
    fn sin_cos_pair() {
        let (sin, cos, code) = Real::new(53).sin_cos(Nearest);
        assert_eq!(sin.to_f64(), 0.0);
        assert_eq!(cos.to_f64(), 1.0);
        let (t_sin, t_cos) = Ternary::decode_pair(code).unwrap();
        assert!(t_sin.is_exact());
        assert!(t_cos.is_exact());

        let x = r(1.0);
        let (sin, cos, code) = x.sin_cos(Nearest);
        assert_abs_diff_eq!(sin.to_f64(), 1f64.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(cos.to_f64(), 1f64.cos(), epsilon = 1e-12);
        assert!(Ternary::decode_pair(code).is_some());
        // The operand is untouched.
        assert_eq!(x.to_f64(), 1.0);

        let (sin, cos, _) = Real::infinity(53).sin_cos(Nearest);
        assert!(sin.is_nan());
        assert!(cos.is_nan());
    }
}
