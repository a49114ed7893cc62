//! Error types for heap operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when mutating a
//! bounded min-heap or configuring one through the builder.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the capacity that was hit).
//! * **No sentinels**: Failures are reported as variants, never as in-band values.
//! * **No-std**: Carries no heap-allocated payloads, so it works without `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Capacity**: Inserting into a full heap, or a batch that does not fit.
//! 2. **Emptiness**: Extracting from a heap with no elements.
//! 3. **Configuration**: Invalid capacity or a parameter set twice.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap (or the requested batch) would exceed the fixed capacity.
    CapacityExceeded {
        /// Maximum number of elements the heap can hold.
        capacity: usize,
    },

    /// `extract_min` was called on a heap with no elements.
    EmptyHeap,

    /// Capacity must be at least 1 and leave room for the unused root slot.
    InvalidCapacity(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for HeapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "Capacity exceeded: heap holds at most {capacity} elements")
            }
            Self::EmptyHeap => write!(f, "extract_min called on an empty heap"),
            Self::InvalidCapacity(capacity) => {
                write!(
                    f,
                    "Invalid capacity: {capacity} (must be >= 1 and < usize::MAX)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for HeapError {}
