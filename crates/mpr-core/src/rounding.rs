//! Rounding modes and the ternary inexactness result.
//!
//! Every operation that can lose precision takes a [`RoundingMode`] and
//! reports a [`Ternary`]: whether the stored result is exact, or was
//! rounded above or below the infinite-precision value.

use rug::float::Round;
use std::cmp::Ordering;

/// Rounding convention applied when a result is fitted to a target
/// precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to the nearest representable value, ties to even.
    #[default]
    Nearest,
    /// Round towards zero (truncation).
    TowardZero,
    /// Round towards +∞.
    TowardPositiveInfinity,
    /// Round towards −∞.
    TowardNegativeInfinity,
    /// Round away from zero.
    AwayFromZero,
    /// Faithful rounding: either of the two neighbouring representable
    /// values is acceptable.
    Faithful,
}

impl RoundingMode {
    /// Every supported mode, in declaration order. Handy for tests and
    /// for callers that sweep the full mode surface.
    pub const ALL: [RoundingMode; 6] = [
        RoundingMode::Nearest,
        RoundingMode::TowardZero,
        RoundingMode::TowardPositiveInfinity,
        RoundingMode::TowardNegativeInfinity,
        RoundingMode::AwayFromZero,
        RoundingMode::Faithful,
    ];

    /// Translate to the engine's rounding constant.
    ///
    /// `Faithful` maps to nearest-rounding: a nearest result is always
    /// one of the two faithful candidates, and the engine binding does
    /// not expose MPFR's faithful mode directly.
    pub(crate) fn to_engine(self) -> Round {
        match self {
            RoundingMode::Nearest | RoundingMode::Faithful => Round::Nearest,
            RoundingMode::TowardZero => Round::Zero,
            RoundingMode::TowardPositiveInfinity => Round::Up,
            RoundingMode::TowardNegativeInfinity => Round::Down,
            RoundingMode::AwayFromZero => Round::AwayZero,
        }
    }
}

/// Direction of the rounding applied to a stored result, relative to the
/// infinite-precision value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Ternary {
    /// The stored value is below the true result (rounded towards −∞).
    Below = -1,
    /// The stored value equals the true result.
    Exact = 0,
    /// The stored value is above the true result (rounded towards +∞).
    Above = 1,
}

impl Ternary {
    /// Signed integer form: −1, 0, or +1.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// `true` when the result was representable without rounding.
    pub fn is_exact(self) -> bool {
        self == Ternary::Exact
    }

    /// Pack two ternaries into a single integer in `0..=8`.
    ///
    /// The encoding is `3·(a + 1) + (b + 1)`; [`Ternary::decode_pair`]
    /// inverts it. Used by dual-result operations such as
    /// [`Real::sin_cos`](crate::Real::sin_cos).
    pub fn encode_pair(a: Ternary, b: Ternary) -> i32 {
        3 * (a.as_i32() + 1) + (b.as_i32() + 1)
    }

    /// Recover the two ternaries packed by [`Ternary::encode_pair`].
    ///
    /// Returns `None` for codes outside `0..=8`.
    pub fn decode_pair(code: i32) -> Option<(Ternary, Ternary)> {
        if !(0..=8).contains(&code) {
            return None;
        }
        let from_offset = |v: i32| match v {
            0 => Ternary::Below,
            1 => Ternary::Exact,
            _ => Ternary::Above,
        };
        Some((from_offset(code / 3), from_offset(code % 3)))
    }
}

impl From<Ordering> for Ternary {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Ternary::Below,
            Ordering::Equal => Ternary::Exact,
            Ordering::Greater => Ternary::Above,
        }
    }
}

impl From<Ternary> for i32 {
    fn from(t: Ternary) -> Self {
        t.as_i32()
    }
}
