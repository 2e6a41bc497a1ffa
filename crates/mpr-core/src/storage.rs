//! Copy-on-write storage cell.
//!
//! A [`CowCell`] is the owning, reference-counted holder of one engine
//! record (a `rug::Float`, which carries its own precision). Values
//! share a cell until one of them mutates; the mutation path goes
//! through [`CowCell::make_unique`], which deep-copies the record at
//! the same precision when — and only when — other references are
//! live.
//!
//! Invariant: after `make_unique` returns, the borrowed record is
//! uniquely owned by this cell. No other live value can observe a
//! write through the returned reference.

use rug::Float;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct CowCell {
    inner: Arc<Float>,
}

impl CowCell {
    pub(crate) fn new(record: Float) -> Self {
        Self {
            inner: Arc::new(record),
        }
    }

    /// Read-only access. Never clones.
    pub(crate) fn get(&self) -> &Float {
        &self.inner
    }

    /// Mutable access, cloning the record first if the cell is shared.
    ///
    /// The clone preserves value and precision bit-for-bit. This is the
    /// only point on the mutation path where the engine allocates;
    /// callers batch their writes against the returned reference rather
    /// than calling this once per write.
    pub(crate) fn make_unique(&mut self) -> &mut Float {
        Arc::make_mut(&mut self.inner)
    }

    /// Pointer identity with another cell.
    pub(crate) fn shares_storage_with(&self, other: &CowCell) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of values currently referencing this cell.
    pub(crate) fn reference_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}
