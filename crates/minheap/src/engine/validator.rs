//! Validation for heap configuration and batch inputs.
//!
//! ## Purpose
//!
//! This module provides the checks that guard heap construction and bulk
//! operations: capacity bounds, batch sizes, and builder misuse.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Up-Front**: Batch checks run before any element is inserted, so a
//!   rejected batch leaves the heap untouched.
//!
//! ## Invariants
//!
//! * All validated capacities can be requested as `capacity + 1` slots without
//!   overflowing `Vec`'s size limit.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not allocate, insert, or reorder anything.

// External dependencies
use core::mem::size_of;

// Internal dependencies
use crate::primitives::errors::HeapError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for heap configuration and batch inputs.
///
/// All methods return `Result<(), HeapError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    /// Validate a requested capacity.
    ///
    /// # Notes
    ///
    /// * Zero is rejected: a heap that can never hold an element is a configuration mistake.
    /// * `capacity + 1` slots of `T` (one is reserved for position 0) must fit
    ///   in `isize::MAX` bytes, the largest allocation a `Vec` can request.
    pub fn validate_capacity<T>(capacity: usize) -> Result<(), HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity(capacity));
        }

        let bytes = capacity
            .checked_add(1)
            .and_then(|slots| slots.checked_mul(size_of::<T>()));
        match bytes {
            Some(b) if b <= isize::MAX as usize => Ok(()),
            _ => Err(HeapError::InvalidCapacity(capacity)),
        }
    }

    /// Validate that `incoming` more elements fit next to `len` live ones.
    pub fn validate_room(len: usize, incoming: usize, capacity: usize) -> Result<(), HeapError> {
        match len.checked_add(incoming) {
            Some(total) if total <= capacity => Ok(()),
            _ => Err(HeapError::CapacityExceeded { capacity }),
        }
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), HeapError> {
        if let Some(param) = duplicate_param {
            return Err(HeapError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
