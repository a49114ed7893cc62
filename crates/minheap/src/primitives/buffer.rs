//! Fixed-capacity backing storage for the heap.
//!
//! ## Purpose
//!
//! This module provides the position-indexed buffer the heap lives in. The
//! buffer is allocated once at construction and never grows or shrinks; only
//! the count of live elements changes.
//!
//! ## Design notes
//!
//! * **Fixed Allocation**: `capacity + 1` slots are allocated up front, slot 0 is never live.
//! * **Logical Length**: `len` tracks the live region `1..=len`; slots past it hold stale data.
//! * **Bounds**: Every push is checked against the capacity, so the live region
//!   can never spill past the allocation.
//!
//! ## Key concepts
//!
//! * **Slot**: One element of the backing array, addressed by a 1-based position.
//! * **Live region**: Positions `1..=len`; the only positions ever exposed to callers.
//!
//! ## Invariants
//!
//! * `len <= capacity` at all times.
//! * `slots.len() == capacity + 1` for the lifetime of the buffer.
//!
//! ## Non-goals
//!
//! * Dynamic resizing. A full buffer rejects further pushes.
//! * Maintaining any ordering. Ordering is the job of the sift algorithms.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::HeapError;
use crate::primitives::position::ROOT;

// ============================================================================
// HeapBuffer - Position-Indexed Storage
// ============================================================================

/// A fixed-size slot array addressed by 1-based positions.
#[derive(Debug, Clone)]
pub struct HeapBuffer<T> {
    /// Backing slots; index 0 is unused.
    slots: Vec<T>,

    /// Number of live elements (positions `1..=len`).
    len: usize,
}

impl<T: PrimInt> HeapBuffer<T> {
    /// Allocate a buffer able to hold `capacity` live elements.
    ///
    /// The capacity must already be validated (non-zero, below `usize::MAX`).
    pub fn new(capacity: usize) -> Self {
        debug_assert!(
            capacity >= 1 && capacity < usize::MAX,
            "HeapBuffer::new: capacity must be validated before allocation"
        );
        Self {
            slots: vec![T::zero(); capacity + 1],
            len: 0,
        }
    }

    /// Allocate a buffer for `capacity` live elements, reporting allocation
    /// failure as `InvalidCapacity` instead of aborting.
    pub fn try_new(capacity: usize) -> Result<Self, HeapError> {
        let slot_count = capacity
            .checked_add(1)
            .ok_or(HeapError::InvalidCapacity(capacity))?;

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(slot_count)
            .map_err(|_| HeapError::InvalidCapacity(capacity))?;
        slots.resize(slot_count, T::zero());

        Ok(Self { slots, len: 0 })
    }

    /// Maximum number of live elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the live region is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the live region fills the whole allocation.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append `value` at position `len + 1` and return that position.
    pub fn push(&mut self, value: T) -> Result<usize, HeapError> {
        if self.is_full() {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.len += 1;
        self.slots[self.len] = value;
        Ok(self.len)
    }

    /// Remove the element at the last live position, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.len];
        self.len -= 1;
        Some(value)
    }

    /// Swap the elements at two live positions.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        debug_assert!(self.is_live(a) && self.is_live(b));
        self.slots.swap(a, b);
    }

    /// Whether `pos` addresses a live element.
    #[inline]
    pub fn is_live(&self, pos: usize) -> bool {
        pos >= ROOT && pos <= self.len
    }

    /// Forget all live elements. The allocation is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// The live elements, in position order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots[ROOT..=self.len]
    }
}

impl<T> Index<usize> for HeapBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, pos: usize) -> &T {
        debug_assert!(pos >= ROOT && pos <= self.len, "position {pos} is not live");
        &self.slots[pos]
    }
}

impl<T> IndexMut<usize> for HeapBuffer<T> {
    #[inline]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        debug_assert!(pos >= ROOT && pos <= self.len, "position {pos} is not live");
        &mut self.slots[pos]
    }
}
