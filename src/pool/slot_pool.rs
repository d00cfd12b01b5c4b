//! Bounded slot pool: recyclable integer ids for interchangeable resources.
//!
//! Grounded use case: a fixed number of texture units or binding points,
//! handed out one at a time and returned deterministically.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::{engine_bail, engine_trace};

// ===== SLOT HANDLE =====

/// Owning handle to one allocated slot id.
///
/// The handle is the only way to return an id to its pool: it is consumed
/// by [`SlotPool::release`], so a released id cannot be released again
/// through the same handle. Handles are neither `Clone` nor `Copy`.
#[must_use = "an unreleased handle keeps its slot allocated"]
#[derive(Debug, PartialEq, Eq)]
pub struct SlotHandle {
    slot: u32,
}

impl SlotHandle {
    /// The slot id this handle owns
    pub fn slot(&self) -> u32 {
        self.slot
    }
}

// ===== SLOT POOL =====

/// Fixed-size pool of integer slot ids over the range `[0, capacity)`.
///
/// Every id is either free (in the pool's free set) or allocated (an
/// outstanding [`SlotHandle`] exists), never both. Allocation always
/// returns the smallest free id, which keeps allocation order
/// deterministic and reproducible in tests.
///
/// Single-threaded: concurrent allocate/release must be serialized by the
/// caller.
pub struct SlotPool {
    capacity: u32,
    free: BTreeSet<u32>,
}

impl SlotPool {
    /// Create a pool with all `capacity` ids free
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            free: (0..capacity).collect(),
        }
    }

    /// Allocate the smallest free id.
    ///
    /// Fails with `PoolExhausted` when every id is outstanding.
    pub fn allocate(&mut self) -> Result<SlotHandle> {
        match self.free.pop_first() {
            Some(slot) => {
                engine_trace!("nebula::SlotPool", "allocated slot {}", slot);
                Ok(SlotHandle { slot })
            }
            None => engine_bail!(
                "nebula::SlotPool",
                Error::PoolExhausted {
                    capacity: self.capacity,
                }
            ),
        }
    }

    /// Return a slot to the pool, consuming its handle.
    ///
    /// Handles must come back to the pool that issued them. Releasing an id
    /// that is already free (possible after [`SlotPool::reset`]) is a hard
    /// error, `DoubleRelease` — the id is never silently re-added, since it
    /// may already be owned by another handle.
    pub fn release(&mut self, handle: SlotHandle) -> Result<()> {
        let slot = handle.slot;
        debug_assert!(slot < self.capacity, "slot {} from a foreign pool", slot);
        if !self.free.insert(slot) {
            engine_bail!("nebula::SlotPool", Error::DoubleRelease { slot });
        }
        engine_trace!("nebula::SlotPool", "released slot {}", slot);
        Ok(())
    }

    /// Total id range
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of free ids
    pub fn available(&self) -> u32 {
        self.free.len() as u32
    }

    /// Number of outstanding ids
    pub fn allocated(&self) -> u32 {
        self.capacity - self.available()
    }

    /// Whether the next allocation would fail
    pub fn is_exhausted(&self) -> bool {
        self.free.is_empty()
    }

    /// Return every id to the free set.
    ///
    /// Used when tearing down the owning context. Handles still outstanding
    /// are invalidated; releasing one afterwards reports `DoubleRelease`.
    pub fn reset(&mut self) {
        self.free = (0..self.capacity).collect();
        engine_trace!("nebula::SlotPool", "reset, {} slots free", self.capacity);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "slot_pool_tests.rs"]
mod tests;
