//! Sift-up and sift-down repair for the binary min-heap.
//!
//! ## Purpose
//!
//! This module restores the min-heap property after a single position of the
//! buffer has been disturbed: a fresh element appended at the end (sift-up)
//! or a replacement element written at the root (sift-down).
//!
//! ## Design notes
//!
//! * **Iterative**: Both repairs are loops, so stack usage does not grow with heap height.
//! * **Strict comparisons**: Elements only move when strictly out of order,
//!   so equal elements are never swapped.
//! * **Deterministic ties**: Sift-down prefers self, then the left child, then the right.
//!
//! ## Key concepts
//!
//! * **Sift-up**: Swap with the parent while the parent is strictly greater.
//! * **Sift-down**: Swap with the smallest child while it is strictly smaller.
//! * **Local minimum**: The smallest of a position and its live children.
//!
//! ## Invariants
//!
//! * Before a repair, the heap property holds everywhere except at the disturbed position.
//! * After a repair, the heap property holds for all live positions.
//!
//! ## Non-goals
//!
//! * This module does not insert or remove elements; it only reorders live ones.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::buffer::HeapBuffer;
use crate::primitives::position::{ROOT, left_child, parent, right_child};

// ============================================================================
// Sift-Up
// ============================================================================

/// Move the element at `pos` toward the root until its parent is not greater.
///
/// Returns the final position of the element.
pub fn sift_up<T: PrimInt>(buf: &mut HeapBuffer<T>, mut pos: usize) -> usize {
    while let Some(p) = parent(pos) {
        if buf[p] <= buf[pos] {
            break;
        }
        buf.swap(p, pos);
        pos = p;
    }
    pos
}

// ============================================================================
// Sift-Down
// ============================================================================

/// Position holding the smallest of `pos` and its live children.
///
/// Ties keep the earlier candidate in the order self, left, right.
#[inline]
pub fn local_min<T: PrimInt>(buf: &HeapBuffer<T>, pos: usize) -> usize {
    let n = buf.len();
    let mut smallest = pos;

    let left = left_child(pos);
    if left <= n && buf[left] < buf[smallest] {
        smallest = left;
    }

    let right = right_child(pos);
    if right <= n && buf[right] < buf[smallest] {
        smallest = right;
    }

    smallest
}

/// Move the element at `pos` toward the leaves until no child is smaller.
///
/// Returns the final position of the element.
pub fn sift_down<T: PrimInt>(buf: &mut HeapBuffer<T>, mut pos: usize) -> usize {
    loop {
        let smallest = local_min(buf, pos);
        if smallest == pos {
            return pos;
        }
        buf.swap(pos, smallest);
        pos = smallest;
    }
}

// ============================================================================
// Verification
// ============================================================================

/// Check the min-heap property over every live position.
pub fn is_heap<T: PrimInt>(buf: &HeapBuffer<T>) -> bool {
    (ROOT + 1..=buf.len()).all(|pos| match parent(pos) {
        Some(p) => buf[p] <= buf[pos],
        None => true,
    })
}
