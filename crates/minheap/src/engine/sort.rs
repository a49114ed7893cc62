//! Heapsort built on [`MinHeap`].
//!
//! Sorting inserts every value into a bounded heap and then extracts the
//! minimum once per value. Inputs longer than [`DEFAULT_CAPACITY`] are
//! rejected before anything is inserted.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::heap::{DEFAULT_CAPACITY, MinHeap};
use crate::engine::validator::Validator;
use crate::primitives::errors::HeapError;

/// Return `values` sorted in non-decreasing order.
pub fn heapsort<T: PrimInt>(values: &[T]) -> Result<Vec<T>, HeapError> {
    let mut out = values.to_vec();
    heapsort_in_place(&mut out)?;
    Ok(out)
}

/// Sort `values` in non-decreasing order, overwriting the input.
///
/// On error the input is left untouched.
pub fn heapsort_in_place<T: PrimInt>(values: &mut [T]) -> Result<(), HeapError> {
    Validator::validate_room(0, values.len(), DEFAULT_CAPACITY)?;
    if values.is_empty() {
        return Ok(());
    }

    // Sized to the input; the length check above already enforced the default bound.
    let mut heap = MinHeap::with_capacity(values.len())?;
    heap.extend_from_slice(values)?;

    for (slot, value) in values.iter_mut().zip(heap.drain_sorted()) {
        *slot = value;
    }
    Ok(())
}
