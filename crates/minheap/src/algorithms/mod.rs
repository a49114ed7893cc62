//! Layer 2: Algorithms
//!
//! This layer implements the heap repair operations. It reorders elements in
//! a [`HeapBuffer`](crate::primitives::buffer::HeapBuffer) but is
//! orchestrated by the engine layer, which decides when each repair runs.

// Sift-up / sift-down repair and heap-property verification.
pub mod sift;
