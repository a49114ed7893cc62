//! # minheap — Bounded Binary Min-Heap for Rust
//!
//! A fixed-capacity, array-backed binary min-heap over primitive integers,
//! with insertion, minimum extraction, and a heapsort built on top of them.
//!
//! ## What is a min-heap?
//!
//! A min-heap is a complete binary tree stored in an array where every
//! parent is less than or equal to its children, so the minimum is always at
//! the root. Insertion appends at the end and sifts the new element up;
//! extraction moves the last element to the root and sifts it down. Both run
//! in O(log n).
//!
//! ## Quick Start
//!
//! ```rust
//! use minheap::prelude::*;
//!
//! let mut heap = Heap::new().capacity(16).build()?;
//!
//! heap.insert(42)?;
//! heap.insert(7)?;
//! heap.insert(19)?;
//!
//! assert_eq!(heap.extract_min()?, 7);
//! assert_eq!(heap.len(), 2);
//! # Result::<(), HeapError>::Ok(())
//! ```
//!
//! ### Heapsort
//!
//! ```rust
//! use minheap::prelude::*;
//!
//! let sorted = heapsort(&[77, 33, 45, 12, 89, 135, 66, 111, 902])?;
//! assert_eq!(sorted, vec![12, 33, 45, 66, 77, 89, 111, 135, 902]);
//! # Result::<(), HeapError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Mutations return `Result<_, HeapError>`:
//!
//! - **`CapacityExceeded`**: the heap is full, or a batch does not fit.
//! - **`EmptyHeap`**: `extract_min` was called with nothing to extract.
//!
//! No operation signals failure through an in-band value, so every integer,
//! including `-1`, is a legitimate element.
//!
//! ```rust
//! use minheap::prelude::*;
//!
//! let mut heap: MinHeap<i32> = Heap::new().capacity(1).build()?;
//!
//! assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
//! heap.insert(-1)?;
//! assert_eq!(
//!     heap.insert(5),
//!     Err(HeapError::CapacityExceeded { capacity: 1 })
//! );
//! assert_eq!(heap.extract_min()?, -1);
//! # Result::<(), HeapError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency. The
//! crate still needs `alloc` for the backing buffer:
//!
//! ```toml
//! [dependencies]
//! minheap = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, positions, and backing storage.
mod primitives;

// Layer 2: Algorithms - sift-up and sift-down.
mod algorithms;

// Layer 3: Engine - the heap type, heapsort, and validation.
mod engine;

// High-level fluent API for building heaps.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        DEFAULT_CAPACITY, DrainSorted, HeapBuilder as Heap, HeapError, MinHeap, heapsort,
        heapsort_in_place,
    };
}

pub use api::{
    DEFAULT_CAPACITY, DrainSorted, HeapBuilder, HeapError, MinHeap, heapsort, heapsort_in_place,
};

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
