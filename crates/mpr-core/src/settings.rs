//! Process-wide default precision.
//!
//! [`Settings`] holds the **default precision** used by constructors
//! that do not take an explicit bit count (`From<f64>`, `FromStr`,
//! `Zero`/`One`). It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`, with explicit `get`/`set`/`reset` accessors —
//! no operation mutates it implicitly.
//!
//! Thread safety: the precision is stored behind a `Mutex` so that it
//! can be changed from any thread. Tests that change it should restore
//! it when done.

use crate::Precision;
use std::sync::{Mutex, OnceLock};

/// Default precision before any call to
/// [`Settings::set_default_precision`]: the significand width of an
/// IEEE 754 double.
pub const INITIAL_DEFAULT_PRECISION: Precision = 53;

/// Minimum precision supported by the engine, in bits.
pub fn prec_min() -> Precision {
    rug::float::prec_min()
}

/// Maximum precision supported by the engine, in bits.
pub fn prec_max() -> Precision {
    rug::float::prec_max()
}

/// Process-wide settings for the mpreal-rs library.
pub struct Settings {
    default_precision: Mutex<Precision>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            default_precision: Mutex::new(INITIAL_DEFAULT_PRECISION),
        })
    }

    /// The precision, in bits, given to values constructed without an
    /// explicit precision.
    pub fn default_precision(&self) -> Precision {
        *self
            .default_precision
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the process-wide default precision.
    ///
    /// # Panics
    ///
    /// Panics if `prec` is outside the engine's representable range
    /// [`prec_min`]`..=`[`prec_max`] — using such a precision is a
    /// programming error, not a recoverable condition.
    pub fn set_default_precision(&self, prec: Precision) {
        assert!(
            (prec_min()..=prec_max()).contains(&prec),
            "default precision {prec} outside supported range {}..={}",
            prec_min(),
            prec_max()
        );
        *self
            .default_precision
            .lock()
            .expect("Settings mutex poisoned") = prec;
    }

    /// Restore the default precision to
    /// [`INITIAL_DEFAULT_PRECISION`].
    pub fn reset_default_precision(&self) {
        *self
            .default_precision
            .lock()
            .expect("Settings mutex poisoned") = INITIAL_DEFAULT_PRECISION;
    }
}
