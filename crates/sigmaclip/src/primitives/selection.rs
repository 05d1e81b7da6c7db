//! In-place order statistic selection.
//!
//! ## Purpose
//!
//! This module provides the selection primitive used by the default center
//! function: given a mutable slice and a target position, it rearranges the
//! slice so that the element at that position is the one a full sort would
//! put there, without sorting the rest.
//!
//! ## Design notes
//!
//! * **Partitioning**: Two-pointer (Hoare-style) scheme; the pivot of every round
//!   is the value currently stored at the target position.
//! * **Narrowing**: After each round only the side containing the target is kept.
//! * **Allocation-free**: Works entirely inside the caller's slice.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Zero-based rank**: `nth` follows `slice::select_nth_unstable`; selecting
//!   `nth` returns the `(nth + 1)`-th smallest value.
//! * **Partial order**: On return `values[..nth] <= values[nth] <= values[nth + 1..]`.
//!
//! ## Invariants
//!
//! * Scan indices never leave the active range `[left, right]`.
//! * The active range strictly shrinks every round, so the loop terminates.
//!
//! ## Non-goals
//!
//! * This module does not filter NaN; callers must pass finite values only.
//! * This module does not validate `nth`; out-of-range input panics on indexing.

// External dependencies
use num_traits::Float;

// ============================================================================
// Selection
// ============================================================================

/// Move the `nth` order statistic (zero-based) into `values[nth]` and return it.
///
/// Expected O(n) time. Elements before `nth` end up `<=` the result and elements
/// after it `>=` the result; no other ordering is guaranteed.
///
/// The slice must not contain NaN: unordered comparisons break the partition
/// invariant.
pub fn select_nth<T: Float>(values: &mut [T], nth: usize) -> T {
    debug_assert!(
        nth < values.len(),
        "select_nth: position {nth} out of range for length {}",
        values.len()
    );

    let k = nth as isize;
    let mut left: isize = 0;
    let mut right: isize = values.len() as isize - 1;

    while left < right {
        let pivot = values[nth];
        let mut i = left;
        let mut j = right;

        loop {
            while i <= right && values[i as usize] < pivot {
                i += 1;
            }
            while j >= left && pivot < values[j as usize] {
                j -= 1;
            }
            if i <= j {
                values.swap(i as usize, j as usize);
                i += 1;
                j -= 1;
            }
            if i > j {
                break;
            }
        }

        if j < k {
            left = i;
        }
        if k < i {
            right = j;
        }
    }

    values[nth]
}
