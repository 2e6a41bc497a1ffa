//! Domain error classification for partial functions.
//!
//! Total functions (arithmetic, the floor family, predicates) never
//! fail: NaN and infinities propagate in-band as values. Partial
//! functions (`ln`, `log2`, `log10`, `sqrt`, `exp`, the inverse
//! hyperbolics) fail with a typed [`DomainError`] that distinguishes an
//! argument outside the real domain from an argument at a pole. The
//! classification is queryable without string matching.

use thiserror::Error;

/// Error raised by a partial function for an argument outside its
/// domain.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// The argument lies outside the real domain of the function
    /// (for example the logarithm of a negative number), or is NaN.
    #[error("not a number: argument outside the real domain")]
    NotANumber,

    /// The argument sits at a pole of the function (for example the
    /// logarithm of zero, or `atanh(±1)`).
    #[error("division by zero: argument at a pole of the function")]
    DivideByZero,
}

impl DomainError {
    /// `true` for the not-a-number classification.
    pub fn is_nan(self) -> bool {
        self == DomainError::NotANumber
    }

    /// `true` for the divide-by-zero classification.
    pub fn is_divide_by_zero(self) -> bool {
        self == DomainError::DivideByZero
    }
}

/// Error returned by [`FromStr`](std::str::FromStr) when a string is
/// not entirely a valid numeral.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid arbitrary-precision numeral")]
pub struct ParseRealError;

/// Shorthand `Result` for partial functions.
pub type Result<T, E = DomainError> = std::result::Result<T, E>;
