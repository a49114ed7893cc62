#![cfg(feature = "dev")]
//! Tests for sift-up and sift-down repair.
//!
//! These tests verify:
//! - Sift-up stops at the root or at a parent that is not greater
//! - Sift-down picks the smallest child and stops at a local minimum
//! - Tie-breaking between equal elements
//! - The heap-property check
//!
//! ## Test Organization
//!
//! 1. **Sift-Up** - Movement toward the root
//! 2. **Local Minimum** - Child selection and ties
//! 3. **Sift-Down** - Movement toward the leaves
//! 4. **Verification** - `is_heap`

use minheap::internals::algorithms::sift::{is_heap, local_min, sift_down, sift_up};
use minheap::internals::primitives::buffer::HeapBuffer;

// ============================================================================
// Helper Functions
// ============================================================================

/// Fill a buffer with `values` at positions `1..=values.len()` without repair.
fn raw_buffer(values: &[i32]) -> HeapBuffer<i32> {
    let mut buf = HeapBuffer::new(values.len().max(1));
    for &v in values {
        buf.push(v).unwrap();
    }
    buf
}

// ============================================================================
// Sift-Up Tests
// ============================================================================

/// Test a new minimum travels all the way to the root.
#[test]
fn test_sift_up_to_root() {
    let mut buf = raw_buffer(&[2, 4, 6, 8, 10, 12, 1]);

    let pos = sift_up(&mut buf, 7);

    assert_eq!(pos, 1);
    assert_eq!(buf.as_slice(), &[1, 4, 2, 8, 10, 12, 6]);
    assert!(is_heap(&buf));
}

/// Test sift-up stops below a parent that is not greater.
#[test]
fn test_sift_up_stops_at_smaller_parent() {
    let mut buf = raw_buffer(&[1, 5, 3, 7, 2]);

    let pos = sift_up(&mut buf, 5);

    assert_eq!(pos, 2);
    assert_eq!(buf.as_slice(), &[1, 2, 3, 7, 5]);
}

/// Test an element equal to its parent does not move.
#[test]
fn test_sift_up_equal_parent_no_swap() {
    let mut buf = raw_buffer(&[3, 3]);

    assert_eq!(sift_up(&mut buf, 2), 2);
}

// ============================================================================
// Local Minimum Tests
// ============================================================================

/// Test local minimum with zero, one, and two children.
#[test]
fn test_local_min_child_counts() {
    let leaf = raw_buffer(&[9]);
    assert_eq!(local_min(&leaf, 1), 1, "A leaf is its own minimum");

    let one_child = raw_buffer(&[9, 4]);
    assert_eq!(local_min(&one_child, 1), 2);

    let two_children = raw_buffer(&[9, 4, 2]);
    assert_eq!(local_min(&two_children, 1), 3);
}

/// Test ties prefer self, then the left child.
#[test]
fn test_local_min_ties() {
    let all_equal = raw_buffer(&[5, 5, 5]);
    assert_eq!(local_min(&all_equal, 1), 1);

    let children_equal = raw_buffer(&[9, 5, 5]);
    assert_eq!(local_min(&children_equal, 1), 2);
}

// ============================================================================
// Sift-Down Tests
// ============================================================================

/// Test a large root sinks along the path of smaller children.
#[test]
fn test_sift_down_to_leaf() {
    let mut buf = raw_buffer(&[50, 10, 20, 15, 30, 25, 40]);

    let pos = sift_down(&mut buf, 1);

    assert_eq!(pos, 4);
    assert_eq!(buf.as_slice(), &[10, 15, 20, 50, 30, 25, 40]);
    assert!(is_heap(&buf));
}

/// Test sift-down does nothing when the root is already the minimum.
#[test]
fn test_sift_down_already_heap() {
    let mut buf = raw_buffer(&[1, 2, 3]);

    assert_eq!(sift_down(&mut buf, 1), 1);
    assert_eq!(buf.as_slice(), &[1, 2, 3]);
}

/// Test sift-down ignores stale slots beyond the live region.
#[test]
fn test_sift_down_ignores_stale_slots() {
    let mut buf = raw_buffer(&[8, 5, -100]);
    buf.pop_last();

    sift_down(&mut buf, 1);

    assert_eq!(buf.as_slice(), &[5, 8]);
}

// ============================================================================
// Verification Tests
// ============================================================================

/// Test is_heap accepts heaps and rejects violations.
#[test]
fn test_is_heap() {
    assert!(is_heap(&raw_buffer(&[])));
    assert!(is_heap(&raw_buffer(&[1])));
    assert!(is_heap(&raw_buffer(&[1, 1, 2, 3, 1])));
    assert!(!is_heap(&raw_buffer(&[2, 1])));
    assert!(!is_heap(&raw_buffer(&[1, 2, 3, 4, 5, 6, 0])));
}
