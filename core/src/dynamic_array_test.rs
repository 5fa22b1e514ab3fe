//! Tests for DynamicArray

use super::*;
use alloc::{format, vec::Vec};
use pretty_assertions::assert_eq;

fn from_slice(values: &[i32]) -> DynamicArray {
    let mut arr = DynamicArray::new(1);
    arr.pop(0).unwrap();
    for &v in values {
        arr.push_back(v);
    }
    arr
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_is_zero_filled_with_double_capacity() {
    let arr = DynamicArray::new(5);
    assert_eq!(arr.len(), 5);
    assert_eq!(arr.capacity(), 10);
    assert_eq!(arr.as_slice(), &[0, 0, 0, 0, 0]);
}

#[test]
fn test_new_zero_is_normalized_to_one() {
    crate::test_utils::init_test_logging();
    let arr = DynamicArray::new(0);
    assert_eq!(arr.len(), 1);
    assert_eq!(arr.capacity(), 2);
    assert_eq!(arr.as_slice(), &[0]);
}

// ============================================================================
// Growth
// ============================================================================

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_new_with_overflowing_capacity_panics() {
    DynamicArray::new(usize::MAX / 2 + 1);
}

#[test]
fn test_growth_doubles_capacity() {
    let mut arr = DynamicArray::new(1);
    assert_eq!(arr.capacity(), 2);
    arr.push_back(1);
    assert_eq!(arr.capacity(), 2);
    arr.push_back(2);
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.capacity(), 4);
    assert_eq!(arr.as_slice(), &[0, 1, 2]);
}

#[test]
fn test_growth_keeps_capacity_above_len_and_copies_linearly() {
    let mut arr = DynamicArray::new(1);
    let mut copies = 0;
    for i in 0..1000 {
        let (len_before, cap_before) = (arr.len(), arr.capacity());
        arr.push_back(i);
        if arr.capacity() != cap_before {
            assert_eq!(arr.capacity(), cap_before * 2);
            copies += len_before;
        }
        assert!(arr.capacity() >= arr.len());
    }
    assert_eq!(arr.len(), 1001);
    assert!(copies < 2 * arr.len(), "{copies} copies for {} pushes", arr.len());
    assert_eq!(arr.get(1000), Ok(999));
}

#[test]
fn test_insert_grows_when_full() {
    let mut arr = DynamicArray::new(2);
    arr.push_back(1);
    arr.push_back(2);
    assert_eq!(arr.capacity(), 4);
    arr.insert(1, 9).unwrap();
    assert_eq!(arr.capacity(), 8);
    assert_eq!(arr.as_slice(), &[0, 9, 0, 1, 2]);
}

// ============================================================================
// Access and mutation
// ============================================================================

#[test]
fn test_front_and_back() {
    let arr = from_slice(&[4, 5, 6]);
    assert_eq!(arr.front(), Ok(4));
    assert_eq!(arr.back(), Ok(6));
}

#[test]
fn test_front_and_back_on_empty() {
    let mut arr = DynamicArray::new(1);
    arr.pop(0).unwrap();
    assert!(arr.is_empty());
    assert_eq!(arr.front(), Err(Error::EmptyContainer));
    assert_eq!(arr.back(), Err(Error::EmptyContainer));
}

#[test]
fn test_set_and_get() {
    let mut arr = DynamicArray::new(3);
    arr.set(1, 42).unwrap();
    assert_eq!(arr.get(1), Ok(42));
    assert_eq!(arr.as_slice(), &[0, 42, 0]);
}

#[test]
fn test_bounds_enforcement() {
    let mut arr = from_slice(&[1, 2, 3]);
    let out_of_range = |index| Error::IndexOutOfRange { index, len: 3 };

    assert_eq!(arr.get(3), Err(out_of_range(3)));
    assert_eq!(arr.set(3, 0), Err(out_of_range(3)));
    assert_eq!(arr.pop(3), Err(out_of_range(3)));
    assert_eq!(arr.insert(4, 0), Err(out_of_range(4)));

    // Failed operations leave the array untouched.
    assert_eq!(arr.as_slice(), &[1, 2, 3]);
    assert_eq!(arr.capacity(), 4);
}

#[test]
fn test_insert_at_len_appends() {
    let mut arr = from_slice(&[1, 2]);
    arr.insert(2, 3).unwrap();
    assert_eq!(arr.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_insert_at_front() {
    let mut arr = from_slice(&[1, 2, 3]);
    arr.insert(0, 0).unwrap();
    assert_eq!(arr.as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn test_pop_shifts_left_and_keeps_capacity() {
    let mut arr = from_slice(&[1, 2, 3, 4]);
    let cap = arr.capacity();
    assert_eq!(arr.pop(1), Ok(2));
    assert_eq!(arr.as_slice(), &[1, 3, 4]);
    assert_eq!(arr.pop(2), Ok(4));
    assert_eq!(arr.as_slice(), &[1, 3]);
    assert_eq!(arr.capacity(), cap);
}

#[test]
fn test_insert_then_pop_restores_sequence() {
    let original = [3, 1, 4, 1, 5];
    for i in 0..=original.len() {
        let mut arr = from_slice(&original);
        arr.insert(i, 77).unwrap();
        assert_eq!(arr.get(i), Ok(77));
        assert_eq!(arr.pop(i), Ok(77));
        assert_eq!(arr.as_slice(), &original);
    }
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_find_returns_first_match() {
    let arr = from_slice(&[5, 7, 5, 7]);
    assert_eq!(arr.find(7), Some(1));
    assert_eq!(arr.find(5), Some(0));
    assert_eq!(arr.find(6), None);
}

#[test]
fn test_find_with_transposition_moves_hit_forward() {
    let mut arr = from_slice(&[1, 2, 3, 3]);
    assert_eq!(arr.find_with_transposition(3), Some(1));
    assert_eq!(arr.as_slice(), &[1, 3, 2, 3]);
    assert_eq!(arr.find_with_transposition(3), Some(0));
    assert_eq!(arr.as_slice(), &[3, 1, 2, 3]);

    // At the front it stays put.
    assert_eq!(arr.find_with_transposition(3), Some(0));
    assert_eq!(arr.as_slice(), &[3, 1, 2, 3]);
}

#[test]
fn test_find_with_transposition_missing_value() {
    let mut arr = from_slice(&[1, 2]);
    assert_eq!(arr.find_with_transposition(9), None);
    assert_eq!(arr.as_slice(), &[1, 2]);
}

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn test_right_rotate_one() {
    let mut arr = from_slice(&[1, 2, 3, 4]);
    arr.right_rotate_one();
    assert_eq!(arr.as_slice(), &[4, 1, 2, 3]);
}

#[test]
fn test_left_rotate_one() {
    let mut arr = from_slice(&[1, 2, 3, 4]);
    arr.left_rotate_one();
    assert_eq!(arr.as_slice(), &[2, 3, 4, 1]);
}

#[test]
fn test_rotations_on_short_arrays_are_noops() {
    let mut empty = from_slice(&[]);
    empty.right_rotate_one();
    empty.left_rotate_one();
    empty.right_rotate(3);
    assert!(empty.is_empty());

    let mut single = from_slice(&[8]);
    single.right_rotate_one();
    single.left_rotate_one();
    single.right_rotate(5);
    assert_eq!(single.as_slice(), &[8]);
}

#[test]
fn test_right_rotate_zero_is_noop() {
    let mut arr = from_slice(&[1, 2, 3]);
    arr.right_rotate(0);
    assert_eq!(arr.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_right_rotate_matches_repeated_single_steps() {
    for len in 1..=6 {
        let values: Vec<i32> = (1..=len).collect();
        for times in 0..=13usize {
            let mut fast = from_slice(&values);
            fast.right_rotate(times);

            let mut slow = from_slice(&values);
            for _ in 0..times % values.len() {
                slow.right_rotate_one();
            }
            assert_eq!(fast, slow, "len {len}, times {times}");
        }
    }
}

#[test]
fn test_left_rotate_undoes_right_rotate() {
    for len in 0..=5 {
        let values: Vec<i32> = (10..10 + len).collect();
        let mut arr = from_slice(&values);
        arr.right_rotate_one();
        arr.left_rotate_one();
        assert_eq!(arr.as_slice(), values.as_slice());
    }
}

// ============================================================================
// Copy, assign and destroy
// ============================================================================

#[test]
fn test_clone_is_independent() {
    let mut a = from_slice(&[1, 2, 3]);
    let mut b = a.clone();
    assert_eq!(a, b);
    assert_eq!(b.capacity(), a.capacity());

    b.set(0, 100).unwrap();
    assert_eq!(a.as_slice(), &[1, 2, 3]);

    a.set(2, 300).unwrap();
    assert_eq!(b.as_slice(), &[100, 2, 3]);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = from_slice(&[9, 8, 7, 6, 5]);
    let mut target = DynamicArray::new(1);
    target.clone_from(&source);
    assert_eq!(target.as_slice(), &[9, 8, 7, 6, 5]);
    assert_eq!(target.capacity(), source.capacity());

    target.push_back(4);
    assert_eq!(source.len(), 5);
}

#[test]
fn test_destroy_releases_buffer() {
    let mut arr = from_slice(&[1, 2, 3]);
    arr.destroy();
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.capacity(), 0);
    assert_eq!(arr.front(), Err(Error::EmptyContainer));

    // Idempotent.
    arr.destroy();
    assert_eq!(arr.capacity(), 0);
}

#[test]
fn test_push_after_destroy_grows_from_one() {
    let mut arr = DynamicArray::new(3);
    arr.destroy();
    arr.push_back(1);
    assert_eq!(arr.capacity(), 1);
    arr.push_back(2);
    assert_eq!(arr.capacity(), 2);
    arr.push_back(3);
    assert_eq!(arr.capacity(), 4);
    assert_eq!(arr.as_slice(), &[1, 2, 3]);
}

// ============================================================================
// Display and Debug
// ============================================================================

#[test]
fn test_display_is_space_separated() {
    assert_eq!(format!("{}", from_slice(&[1, -2, 3])), "1 -2 3");
    assert_eq!(format!("{}", from_slice(&[])), "");
}

#[test]
fn test_debug_shows_live_elements_only() {
    let arr = DynamicArray::new(2);
    assert_eq!(
        format!("{arr:?}"),
        "DynamicArray { len: 2, capacity: 4, elements: [0, 0] }"
    );
}

// ============================================================================
// Driver scenario
// ============================================================================

#[test]
fn test_scenario_hand_trace() {
    let mut v = DynamicArray::new(5);
    assert_eq!(v.as_slice(), &[0, 0, 0, 0, 0]);

    v.push_back(10);
    v.push_back(20);
    v.push_back(30);
    assert_eq!(v.as_slice(), &[0, 0, 0, 0, 0, 10, 20, 30]);
    assert_eq!(v.len(), 8);
    assert_eq!(v.front(), Ok(0));
    assert_eq!(v.back(), Ok(30));

    v.set(0, 99).unwrap();
    assert_eq!(v.as_slice(), &[99, 0, 0, 0, 0, 10, 20, 30]);

    v.insert(2, 50).unwrap();
    assert_eq!(v.as_slice(), &[99, 0, 50, 0, 0, 0, 10, 20, 30]);
    assert_eq!(v.len(), 9);

    assert_eq!(v.find(20), Some(7));

    v.right_rotate_one();
    assert_eq!(v.as_slice(), &[30, 99, 0, 50, 0, 0, 0, 10, 20]);

    v.right_rotate(3);
    assert_eq!(v.as_slice(), &[0, 10, 20, 30, 99, 0, 50, 0, 0]);

    v.left_rotate_one();
    assert_eq!(v.as_slice(), &[10, 20, 30, 99, 0, 50, 0, 0, 0]);

    assert_eq!(v.pop(2), Ok(30));
    assert_eq!(v.as_slice(), &[10, 20, 99, 0, 50, 0, 0, 0]);

    assert_eq!(v.find_with_transposition(30), None);
    assert_eq!(v.pop(100), Err(Error::IndexOutOfRange { index: 100, len: 8 }));
    assert_eq!(v.as_slice(), &[10, 20, 99, 0, 50, 0, 0, 0]);
}

#[cfg(feature = "std")]
#[test]
fn test_print_leaves_array_unchanged() {
    let arr = from_slice(&[1, 2, 3]);
    arr.print();
    assert_eq!(arr.as_slice(), &[1, 2, 3]);
    assert_eq!(arr.capacity(), 4);
}
