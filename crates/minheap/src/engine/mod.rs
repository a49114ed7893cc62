//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates heap mutations by coordinating the backing buffer
//! (primitives) with the sift repairs (algorithms). It owns the public heap
//! type, the heapsort routines, and input validation.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bounded binary min-heap.
pub mod heap;

/// Heapsort over the bounded heap.
pub mod sort;

/// Validation utilities.
pub mod validator;
