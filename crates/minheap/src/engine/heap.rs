//! Bounded binary min-heap.
//!
//! ## Purpose
//!
//! This module provides [`MinHeap`], the array-backed priority queue at the
//! center of the crate. It owns a fixed buffer and coordinates the sift
//! algorithms on every mutation.
//!
//! ## Design notes
//!
//! * **Bounded**: Capacity is fixed at construction; a full heap rejects inserts.
//! * **Typed failures**: Full and empty conditions are `HeapError` variants, never sentinels.
//! * **Atomic batches**: Bulk inserts are checked for room before the first element goes in.
//! * **Generics**: Generic over `PrimInt` element types, defaulting to `i64`.
//!
//! ## Key concepts
//!
//! * **Insert**: Append at position `n + 1`, then sift up.
//! * **Extract**: Take the root, move the last element to the root, then sift down.
//!
//! ## Invariants
//!
//! * `0 <= len() <= capacity()`.
//! * The min-heap property holds for all live positions between operations.
//! * A failed operation leaves the heap unchanged.
//!
//! ## Non-goals
//!
//! * Growing past the configured capacity.
//! * Decrease-key, merge, or arbitrary removal.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::sift::{is_heap, sift_down, sift_up};
use crate::engine::validator::Validator;
use crate::primitives::buffer::HeapBuffer;
use crate::primitives::errors::HeapError;
use crate::primitives::position::ROOT;

/// Capacity used by [`MinHeap::new`] and the free `heapsort` functions.
pub const DEFAULT_CAPACITY: usize = 1000;

// ============================================================================
// MinHeap
// ============================================================================

/// A fixed-capacity binary min-heap of integers.
#[derive(Debug, Clone)]
pub struct MinHeap<T = i64> {
    buf: HeapBuffer<T>,
}

impl<T: PrimInt> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> MinHeap<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty heap holding up to [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self {
            buf: HeapBuffer::new(DEFAULT_CAPACITY),
        }
    }

    /// Create an empty heap holding up to `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        Validator::validate_capacity::<T>(capacity)?;
        Ok(Self {
            buf: HeapBuffer::try_new(capacity)?,
        })
    }

    /// Build a heap of default capacity by inserting `values` in order.
    pub fn from_values(values: &[T]) -> Result<Self, HeapError> {
        let mut heap = Self::new();
        heap.extend_from_slice(values)?;
        Ok(heap)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert `value`, failing with `CapacityExceeded` if the heap is full.
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        let pos = self.buf.push(value)?;
        sift_up(&mut self.buf, pos);
        Ok(())
    }

    /// Remove and return the minimum, failing with `EmptyHeap` if there is none.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        let min = self.peek().ok_or(HeapError::EmptyHeap)?;
        let last = self.buf.pop_last().ok_or(HeapError::EmptyHeap)?;

        // With one element left the popped slot was the root itself.
        if !self.buf.is_empty() {
            self.buf[ROOT] = last;
            sift_down(&mut self.buf, ROOT);
        }

        Ok(min)
    }

    /// Insert every element of `values`, or none of them if they do not all fit.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), HeapError> {
        Validator::validate_room(self.len(), values.len(), self.capacity())?;
        for &value in values {
            self.insert(value)?;
        }
        Ok(())
    }

    /// Remove all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Iterator that extracts elements in non-decreasing order until the heap is empty.
    ///
    /// Elements not consumed before the iterator is dropped stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// The minimum element, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        if self.buf.is_empty() {
            None
        } else {
            Some(self.buf[ROOT])
        }
    }

    /// Number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Maximum number of elements the heap can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether another insert would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    /// The live elements in heap order (root first).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Whether the min-heap property holds over the live elements.
    pub fn is_heap(&self) -> bool {
        is_heap(&self.buf)
    }
}

// ============================================================================
// DrainSorted
// ============================================================================

/// Draining iterator returned by [`MinHeap::drain_sorted`].
#[derive(Debug)]
pub struct DrainSorted<'a, T: PrimInt> {
    heap: &'a mut MinHeap<T>,
}

impl<T: PrimInt> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.heap.len();
        (n, Some(n))
    }
}

impl<T: PrimInt> ExactSizeIterator for DrainSorted<'_, T> {}
