//! High-level API for bounded min-heaps.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for configuring a heap.
//! It implements a fluent builder that validates its parameters when
//! `.build()` is called.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated once, in `build()`.
//! * **Type-Safe**: Generic over `PrimInt` element types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`HeapBuilder`] via `Heap::new()`.
//! 2. Chain configuration methods (`.capacity()`).
//! 3. Call `.build()` to obtain a [`MinHeap`].

// External dependencies
use core::marker::PhantomData;
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::heap::{DEFAULT_CAPACITY, DrainSorted, MinHeap};
pub use crate::engine::sort::{heapsort, heapsort_in_place};
pub use crate::primitives::errors::HeapError;

// ============================================================================
// HeapBuilder
// ============================================================================

/// Fluent builder for [`MinHeap`].
#[derive(Debug, Clone)]
pub struct HeapBuilder<T = i64> {
    /// Maximum number of elements (default: [`DEFAULT_CAPACITY`]).
    pub capacity: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _element: PhantomData<T>,
}

impl<T: PrimInt> Default for HeapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> HeapBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            capacity: None,
            duplicate_param: None,
            _element: PhantomData,
        }
    }

    /// Set the maximum number of elements the heap can hold.
    pub fn capacity(mut self, capacity: usize) -> Self {
        if self.capacity.is_some() {
            self.duplicate_param = Some("capacity");
        }
        self.capacity = Some(capacity);
        self
    }

    /// Validate the configuration and allocate an empty heap.
    pub fn build(self) -> Result<MinHeap<T>, HeapError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        MinHeap::with_capacity(self.capacity.unwrap_or(DEFAULT_CAPACITY))
    }
}
