//! The `Real` value type.
//!
//! [`Real`] is a thin value-type handle over a copy-on-write storage
//! cell holding one MPFR record. Cloning a
//! `Real` is a reference-count bump; the first in-place operation on a
//! shared value clones the record, so no clone ever observes another
//! value's mutation. Distinct values can be read from any number of
//! threads concurrently.
//!
//! The arithmetic surface (pure and in-place forms, operators,
//! reverse operations) lives in the sibling modules of this crate; this
//! module carries construction, precision management, classification,
//! and comparison.

use crate::rounding::{RoundingMode, Ternary};
use crate::settings::Settings;
use crate::storage::CowCell;
use crate::Precision;
use rug::float::Special;
use rug::Float;
use std::cmp::Ordering;
use std::fmt;

/// An arbitrary-precision binary floating-point number with value
/// semantics.
///
/// The observable state is the number (finite, NaN, ±∞, or ±0) and its
/// precision in bits, fixed when the underlying record is created.
/// Operations between values of different precision produce a result at
/// the **receiver's** precision; precision is never widened silently.
#[derive(Clone)]
pub struct Real {
    pub(crate) cell: CowCell,
}

impl Real {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Positive zero at `prec` bits.
    ///
    /// # Panics
    ///
    /// Panics if `prec` is outside the engine's supported range, as do
    /// all constructors taking an explicit precision.
    pub fn new(prec: Precision) -> Self {
        Self::from_engine(Float::new(prec))
    }

    /// The given double, rounded to nearest at `prec` bits.
    pub fn with_val(prec: Precision, value: f64) -> Self {
        Self::from_engine(Float::with_val(prec, value))
    }

    /// The given double at `prec` bits under an explicit rounding mode,
    /// with the rounding direction that was applied.
    pub fn with_val_round(prec: Precision, value: f64, mode: RoundingMode) -> (Self, Ternary) {
        let (f, ord) = Float::with_val_round(prec, value, mode.to_engine());
        (Self::from_engine(f), Ternary::from(ord))
    }

    /// Not-a-number at `prec` bits.
    pub fn nan(prec: Precision) -> Self {
        Self::from_engine(Float::with_val(prec, Special::Nan))
    }

    /// Positive infinity at `prec` bits.
    pub fn infinity(prec: Precision) -> Self {
        Self::from_engine(Float::with_val(prec, Special::Infinity))
    }

    /// Negative infinity at `prec` bits.
    pub fn neg_infinity(prec: Precision) -> Self {
        Self::from_engine(Float::with_val(prec, Special::NegInfinity))
    }

    /// Negative zero at `prec` bits.
    pub fn neg_zero(prec: Precision) -> Self {
        Self::from_engine(Float::with_val(prec, Special::NegZero))
    }

    pub(crate) fn from_engine(record: Float) -> Self {
        Self {
            cell: CowCell::new(record),
        }
    }

    pub(crate) fn engine(&self) -> &Float {
        self.cell.get()
    }

    // ── Precision ────────────────────────────────────────────────────────────

    /// Precision of this value, in bits.
    pub fn precision(&self) -> Precision {
        self.engine().prec()
    }

    /// Change the precision in place, rounding the stored value under
    /// `mode` when it no longer fits.
    ///
    /// # Panics
    ///
    /// Panics if `prec` is outside the engine's supported range.
    pub fn set_precision(&mut self, prec: Precision, mode: RoundingMode) -> Ternary {
        Ternary::from(self.cell.make_unique().set_prec_round(prec, mode.to_engine()))
    }

    // ── Classification ───────────────────────────────────────────────────────

    /// `true` if this value is NaN.
    pub fn is_nan(&self) -> bool {
        self.engine().is_nan()
    }

    /// `true` if this value is +∞ or −∞.
    pub fn is_infinite(&self) -> bool {
        self.engine().is_infinite()
    }

    /// `true` if this value is neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.engine().is_finite()
    }

    /// `true` if this value is +0 or −0.
    pub fn is_zero(&self) -> bool {
        self.engine().is_zero()
    }

    /// `true` if this value is an exact integer.
    pub fn is_integer(&self) -> bool {
        self.engine().is_integer()
    }

    /// `true` if the sign bit is set (including −0 and NaN with a
    /// negative sign bit).
    pub fn is_sign_negative(&self) -> bool {
        self.engine().is_sign_negative()
    }

    /// `true` if the sign bit is clear.
    pub fn is_sign_positive(&self) -> bool {
        self.engine().is_sign_positive()
    }

    /// Compare against zero: `None` for NaN, otherwise the ordering of
    /// this value relative to zero.
    pub fn sign(&self) -> Option<Ordering> {
        self.engine().cmp0()
    }

    // ── Conversion ───────────────────────────────────────────────────────────

    /// Nearest double to this value.
    pub fn to_f64(&self) -> f64 {
        self.engine().to_f64()
    }

    /// Double conversion under an explicit rounding mode.
    pub fn to_f64_round(&self, mode: RoundingMode) -> f64 {
        self.engine().to_f64_round(mode.to_engine())
    }

    // ── Storage diagnostics ──────────────────────────────────────────────────

    /// `true` while `self` and `other` still share one storage cell.
    ///
    /// Sharing ends the moment either side is mutated; this is a
    /// diagnostic for the copy-on-write contract, not part of the
    /// numeric API.
    pub fn shares_storage_with(&self, other: &Real) -> bool {
        self.cell.shares_storage_with(&other.cell)
    }

    /// Number of values currently referencing this value's storage.
    pub fn storage_reference_count(&self) -> usize {
        self.cell.reference_count()
    }

    // ── Min / max ────────────────────────────────────────────────────────────

    /// The smaller of `self` and `other`; a NaN operand is ignored when
    /// the other side is a number. Result at `self`'s precision rules
    /// (a clone of whichever operand wins).
    pub fn min(&self, other: &Real) -> Real {
        if self.is_nan() {
            return other.clone();
        }
        if other.is_nan() {
            return self.clone();
        }
        // Prefer the negative zero so min(−0, +0) is −0.
        if self.is_zero() && other.is_zero() {
            return if self.is_sign_negative() {
                self.clone()
            } else {
                other.clone()
            };
        }
        if self.engine() <= other.engine() {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// The larger of `self` and `other`; a NaN operand is ignored when
    /// the other side is a number.
    pub fn max(&self, other: &Real) -> Real {
        if self.is_nan() {
            return other.clone();
        }
        if other.is_nan() {
            return self.clone();
        }
        if self.is_zero() && other.is_zero() {
            return if self.is_sign_positive() {
                self.clone()
            } else {
                other.clone()
            };
        }
        if self.engine() >= other.engine() {
            self.clone()
        } else {
            other.clone()
        }
    }
}

// ── Default-precision conversions ─────────────────────────────────────────────

impl From<f64> for Real {
    /// Convert at the process-wide default precision.
    fn from(value: f64) -> Self {
        Self::with_val(Settings::instance().default_precision(), value)
    }
}

impl From<i32> for Real {
    /// Convert at the process-wide default precision.
    fn from(value: i32) -> Self {
        Self::from_engine(Float::with_val(
            Settings::instance().default_precision(),
            value,
        ))
    }
}

impl From<u32> for Real {
    /// Convert at the process-wide default precision.
    fn from(value: u32) -> Self {
        Self::from_engine(Float::with_val(
            Settings::instance().default_precision(),
            value,
        ))
    }
}

// ── Comparisons (IEEE semantics: NaN is unordered) ────────────────────────────

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.engine() == other.engine()
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.engine().partial_cmp(other.engine())
    }
}

impl PartialEq<f64> for Real {
    fn eq(&self, other: &f64) -> bool {
        self.engine() == other
    }
}

impl PartialOrd<f64> for Real {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.engine().partial_cmp(other)
    }
}

impl PartialEq<i32> for Real {
    fn eq(&self, other: &i32) -> bool {
        self.engine() == other
    }
}

impl PartialOrd<i32> for Real {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        self.engine().partial_cmp(other)
    }
}

// ── num-traits interop ────────────────────────────────────────────────────────

impl num_traits::Zero for Real {
    /// Positive zero at the process-wide default precision.
    fn zero() -> Self {
        Real::new(Settings::instance().default_precision())
    }

    fn is_zero(&self) -> bool {
        Real::is_zero(self)
    }
}

impl num_traits::One for Real {
    /// One at the process-wide default precision.
    fn one() -> Self {
        Real::from_engine(Float::with_val(
            Settings::instance().default_precision(),
            1,
        ))
    }
}

impl fmt::Debug for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Real {{ value: {}, precision: {} }}", self, self.precision())
    }
}
