//! Operator sugar over the arithmetic surface.
//!
//! All operators round to nearest and preserve the guarantees of the
//! named forms: operands are never mutated, results take the
//! left-hand value's precision, and scalar-left subtraction and
//! division go through the engine's reverse primitives.

use crate::rounding::RoundingMode;
use crate::value::Real;
use rug::ops::{
    AddAssignRound, DivAssignRound, DivFromRound, MulAssignRound, SubAssignRound, SubFromRound,
};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

const DEFAULT: RoundingMode = RoundingMode::Nearest;

// ── Real ⊕ Real ───────────────────────────────────────────────────────────────

impl Add for &Real {
    type Output = Real;
    fn add(self, rhs: &Real) -> Real {
        Real::add(self, rhs, DEFAULT).0
    }
}

impl Add for Real {
    type Output = Real;
    fn add(mut self, rhs: Real) -> Real {
        self.add_mut(&rhs, DEFAULT);
        self
    }
}

impl Sub for &Real {
    type Output = Real;
    fn sub(self, rhs: &Real) -> Real {
        Real::sub(self, rhs, DEFAULT).0
    }
}

impl Sub for Real {
    type Output = Real;
    fn sub(mut self, rhs: Real) -> Real {
        self.sub_mut(&rhs, DEFAULT);
        self
    }
}

impl Mul for &Real {
    type Output = Real;
    fn mul(self, rhs: &Real) -> Real {
        Real::mul(self, rhs, DEFAULT).0
    }
}

impl Mul for Real {
    type Output = Real;
    fn mul(mut self, rhs: Real) -> Real {
        self.mul_mut(&rhs, DEFAULT);
        self
    }
}

impl Div for &Real {
    type Output = Real;
    fn div(self, rhs: &Real) -> Real {
        Real::div(self, rhs, DEFAULT).0
    }
}

impl Div for Real {
    type Output = Real;
    fn div(mut self, rhs: Real) -> Real {
        self.div_mut(&rhs, DEFAULT);
        self
    }
}

impl Neg for &Real {
    type Output = Real;
    fn neg(self) -> Real {
        self.negated(DEFAULT).0
    }
}

impl Neg for Real {
    type Output = Real;
    fn neg(mut self) -> Real {
        self.negate_mut(DEFAULT);
        self
    }
}

// ── Real ⊕ scalar ─────────────────────────────────────────────────────────────

macro_rules! scalar_rhs_ops {
    ($($scalar:ty),*) => {$(
        impl Add<$scalar> for &Real {
            type Output = Real;
            fn add(self, rhs: $scalar) -> Real {
                let mut out = self.clone();
                out.cell.make_unique().add_assign_round(rhs, DEFAULT.to_engine());
                out
            }
        }

        impl Add<$scalar> for Real {
            type Output = Real;
            fn add(mut self, rhs: $scalar) -> Real {
                self.cell.make_unique().add_assign_round(rhs, DEFAULT.to_engine());
                self
            }
        }

        impl Sub<$scalar> for &Real {
            type Output = Real;
            fn sub(self, rhs: $scalar) -> Real {
                let mut out = self.clone();
                out.cell.make_unique().sub_assign_round(rhs, DEFAULT.to_engine());
                out
            }
        }

        impl Sub<$scalar> for Real {
            type Output = Real;
            fn sub(mut self, rhs: $scalar) -> Real {
                self.cell.make_unique().sub_assign_round(rhs, DEFAULT.to_engine());
                self
            }
        }

        impl Mul<$scalar> for &Real {
            type Output = Real;
            fn mul(self, rhs: $scalar) -> Real {
                let mut out = self.clone();
                out.cell.make_unique().mul_assign_round(rhs, DEFAULT.to_engine());
                out
            }
        }

        impl Mul<$scalar> for Real {
            type Output = Real;
            fn mul(mut self, rhs: $scalar) -> Real {
                self.cell.make_unique().mul_assign_round(rhs, DEFAULT.to_engine());
                self
            }
        }

        impl Div<$scalar> for &Real {
            type Output = Real;
            fn div(self, rhs: $scalar) -> Real {
                let mut out = self.clone();
                out.cell.make_unique().div_assign_round(rhs, DEFAULT.to_engine());
                out
            }
        }

        impl Div<$scalar> for Real {
            type Output = Real;
            fn div(mut self, rhs: $scalar) -> Real {
                self.cell.make_unique().div_assign_round(rhs, DEFAULT.to_engine());
                self
            }
        }
    )*};
}

scalar_rhs_ops!(f64, i32);

// ── scalar ⊕ Real ─────────────────────────────────────────────────────────────
//
// Addition and multiplication commute; subtraction and division go
// through the engine's scalar-left primitives.

macro_rules! scalar_lhs_ops {
    ($($scalar:ty),*) => {$(
        impl Add<&Real> for $scalar {
            type Output = Real;
            fn add(self, rhs: &Real) -> Real {
                rhs + self
            }
        }

        impl Add<Real> for $scalar {
            type Output = Real;
            fn add(self, rhs: Real) -> Real {
                rhs + self
            }
        }

        impl Mul<&Real> for $scalar {
            type Output = Real;
            fn mul(self, rhs: &Real) -> Real {
                rhs * self
            }
        }

        impl Mul<Real> for $scalar {
            type Output = Real;
            fn mul(self, rhs: Real) -> Real {
                rhs * self
            }
        }

        impl Sub<&Real> for $scalar {
            type Output = Real;
            fn sub(self, rhs: &Real) -> Real {
                let mut out = rhs.clone();
                out.cell.make_unique().sub_from_round(self, DEFAULT.to_engine());
                out
            }
        }

        impl Sub<Real> for $scalar {
            type Output = Real;
            fn sub(self, mut rhs: Real) -> Real {
                rhs.cell.make_unique().sub_from_round(self, DEFAULT.to_engine());
                rhs
            }
        }

        impl Div<&Real> for $scalar {
            type Output = Real;
            fn div(self, rhs: &Real) -> Real {
                let mut out = rhs.clone();
                out.cell.make_unique().div_from_round(self, DEFAULT.to_engine());
                out
            }
        }

        impl Div<Real> for $scalar {
            type Output = Real;
            fn div(self, mut rhs: Real) -> Real {
                rhs.cell.make_unique().div_from_round(self, DEFAULT.to_engine());
                rhs
            }
        }
    )*};
}

scalar_lhs_ops!(f64, i32);

// ── Compound assignment ───────────────────────────────────────────────────────

impl AddAssign<&Real> for Real {
    fn add_assign(&mut self, rhs: &Real) {
        self.add_mut(rhs, DEFAULT);
    }
}

impl AddAssign for Real {
    fn add_assign(&mut self, rhs: Real) {
        self.add_mut(&rhs, DEFAULT);
    }
}

impl SubAssign<&Real> for Real {
    fn sub_assign(&mut self, rhs: &Real) {
        self.sub_mut(rhs, DEFAULT);
    }
}

impl SubAssign for Real {
    fn sub_assign(&mut self, rhs: Real) {
        self.sub_mut(&rhs, DEFAULT);
    }
}

impl MulAssign<&Real> for Real {
    fn mul_assign(&mut self, rhs: &Real) {
        self.mul_mut(rhs, DEFAULT);
    }
}

impl MulAssign for Real {
    fn mul_assign(&mut self, rhs: Real) {
        self.mul_mut(&rhs, DEFAULT);
    }
}

impl DivAssign<&Real> for Real {
    fn div_assign(&mut self, rhs: &Real) {
        self.div_mut(rhs, DEFAULT);
    }
}

impl DivAssign for Real {
    fn div_assign(&mut self, rhs: Real) {
        self.div_mut(&rhs, DEFAULT);
    }
}

macro_rules! scalar_assign_ops {
    ($($scalar:ty),*) => {$(
        impl AddAssign<$scalar> for Real {
            fn add_assign(&mut self, rhs: $scalar) {
                self.cell.make_unique().add_assign_round(rhs, DEFAULT.to_engine());
            }
        }

        impl SubAssign<$scalar> for Real {
            fn sub_assign(&mut self, rhs: $scalar) {
                self.cell.make_unique().sub_assign_round(rhs, DEFAULT.to_engine());
            }
        }

        impl MulAssign<$scalar> for Real {
            fn mul_assign(&mut self, rhs: $scalar) {
                self.cell.make_unique().mul_assign_round(rhs, DEFAULT.to_engine());
            }
        }

        impl DivAssign<$scalar> for Real {
            fn div_assign(&mut self, rhs: $scalar) {
                self.cell.make_unique().div_assign_round(rhs, DEFAULT.to_engine());
            }
        }
    )*};
}

scalar_assign_ops!(f64, i32);
