//! # mpreal
//!
//! An arbitrary-precision floating-point value type over GNU MPFR.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `mpr-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! mpreal = "0.1"
//! ```
//!
//! ```rust
//! use mpreal::{Real, RoundingMode};
//!
//! let a = Real::with_val(128, 3.14);
//! let b = Real::with_val(128, 2.71);
//! let (sum, ternary) = a.add(&b, RoundingMode::Nearest);
//! assert!((sum.to_f64() - 5.85).abs() < 1e-12);
//! assert!(ternary.as_i32().abs() <= 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core value type, rounding model, and text conversion.
pub use mpr_core as core;

/// Byte-stream and printf-style I/O adapters.
pub use mpr_io as io;

pub use mpr_core::{
    div_from, format_exp, format_radix, format_shortest, parse_all, parse_radix, prec_max,
    prec_min, sub_from, DomainError, ParseRealError, ParseResult, Precision, Real, RoundingMode,
    Settings, Ternary,
};
pub use mpr_io::{read_formatted, read_real, read_real_from_stdin, stdin_guard, write_formatted};
