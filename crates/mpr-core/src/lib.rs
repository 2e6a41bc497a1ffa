//! # mpr-core
//!
//! The value-type layer of mpreal-rs: an arbitrary-precision,
//! binary floating-point number ([`Real`]) that behaves as an ordinary
//! immutable-by-default Rust value while a shared, reference-counted
//! MPFR record (via the `rug` crate) performs the arithmetic.
//!
//! The crate provides the rounding/ternary model, the copy-on-write
//! storage cell, the dual pure/in-place operation surface, the domain
//! error classifier for partial functions, and the text formatting and
//! parsing engines. Byte-stream and printf-style adapters live in the
//! sibling `mpr-io` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Domain error classification for partial functions.
pub mod errors;

/// Value → text rendering in arbitrary bases.
pub mod format;

/// Text → value conversion with partial-match position tracking.
pub mod parse;

/// Rounding modes and the ternary inexactness result.
pub mod rounding;

/// Process-wide default precision.
pub mod settings;

/// The `Real` value type and its operation surface.
pub mod value;

// ── Private modules (inherent impls on `Real`) ───────────────────────────────

mod arith;
mod ops;
mod storage;
mod transcendental;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Precision of a number, as a bit count of its significand.
///
/// Always positive; bounded by [`settings::prec_min`] and
/// [`settings::prec_max`].
pub type Precision = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use arith::{div_from, sub_from};
pub use errors::{DomainError, ParseRealError, Result};
pub use format::{format_exp, format_radix, format_shortest};
pub use parse::{parse_all, parse_radix, ParseResult};
pub use rounding::{RoundingMode, Ternary};
pub use settings::{prec_max, prec_min, Settings};
pub use value::Real;
