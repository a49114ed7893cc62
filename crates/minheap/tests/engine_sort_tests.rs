//! Tests for heapsort.
//!
//! ## Test Organization
//!
//! 1. **Scenarios** - Sample data, empty, single element
//! 2. **Properties** - Sorted input, idempotence, random permutations
//! 3. **In-Place** - Overwriting the input buffer
//! 4. **Capacity** - Inputs at and beyond the default capacity

use rand::prelude::*;

use minheap::{DEFAULT_CAPACITY, HeapError, heapsort, heapsort_in_place};

// ============================================================================
// Scenario Tests
// ============================================================================

/// Test the sample data sorts correctly.
#[test]
fn test_heapsort_sample() {
    let sorted = heapsort(&[77, 33, 45, 12, 89, 135, 66, 111, 902]).unwrap();

    assert_eq!(sorted, vec![12, 33, 45, 66, 77, 89, 111, 135, 902]);
}

/// Test empty and single-element inputs.
#[test]
fn test_heapsort_trivial() {
    let empty: [i32; 0] = [];
    assert_eq!(heapsort(&empty).unwrap(), Vec::<i32>::new());
    assert_eq!(heapsort(&[5]).unwrap(), vec![5]);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test sorted input is returned unchanged.
#[test]
fn test_heapsort_already_sorted() {
    let values: Vec<i64> = (-20..20).collect();

    assert_eq!(heapsort(&values).unwrap(), values);
}

/// Test sorting twice equals sorting once.
#[test]
fn test_heapsort_idempotent() {
    let values = [9, -3, 9, 0, 4, -3, 100, 2];

    let once = heapsort(&values).unwrap();
    let twice = heapsort(&once).unwrap();

    assert_eq!(once, twice);
}

/// Test random inputs against the standard library sort.
#[test]
fn test_heapsort_matches_std_sort() {
    let mut rng = StdRng::seed_from_u64(1234);

    for len in [0, 1, 2, 3, 7, 64, 255, DEFAULT_CAPACITY] {
        let values: Vec<i32> = (0..len).map(|_| rng.random_range(-1000..1000)).collect();

        let mut expected = values.clone();
        expected.sort();

        assert_eq!(heapsort(&values).unwrap(), expected, "len = {len}");
    }
}

/// Test the extreme values of an unsigned type.
#[test]
fn test_heapsort_unsigned_extremes() {
    let values = [u64::MAX, 0, 1, u64::MAX, 0];

    assert_eq!(heapsort(&values).unwrap(), vec![0, 0, 1, u64::MAX, u64::MAX]);
}

// ============================================================================
// In-Place Tests
// ============================================================================

/// Test heapsort_in_place overwrites the input with the sorted result.
#[test]
fn test_heapsort_in_place() {
    let mut values = [77, 33, 45, 12, 89, 135, 66, 111, 902];

    heapsort_in_place(&mut values).unwrap();

    assert_eq!(values, [12, 33, 45, 66, 77, 89, 111, 135, 902]);
}

// ============================================================================
// Capacity Tests
// ============================================================================

/// Test inputs longer than the default capacity are rejected.
#[test]
fn test_heapsort_exceeds_capacity() {
    let values = vec![1i32; DEFAULT_CAPACITY + 1];

    assert_eq!(
        heapsort(&values),
        Err(HeapError::CapacityExceeded {
            capacity: DEFAULT_CAPACITY
        })
    );
}

/// Test a rejected in-place sort leaves the input untouched.
#[test]
fn test_heapsort_in_place_exceeds_capacity_untouched() {
    let mut values: Vec<i32> = (0..=DEFAULT_CAPACITY as i32).rev().collect();
    let before = values.clone();

    assert!(heapsort_in_place(&mut values).is_err());
    assert_eq!(values, before);
}
