//! Shared helpers for integration tests

#![allow(dead_code)]

use cfsearch::tree::{in_order, sorted_rank};

/// Layout used throughout the search tests:
///
/// ```text
///         14
///     6         20
///   2   10    18  22
///  0 4 8  12 16
/// ```
pub const LOOKUP: [i32; 12] = [14, 6, 20, 2, 10, 18, 22, 0, 4, 8, 12, 16];

/// Elements of a layout in sorted (in-order) order
pub fn in_order_values<T: Clone>(cfs: &[T]) -> Vec<T> {
    in_order(cfs).map(|(_, value)| value.clone()).collect()
}

/// Reference lower bound on the plain sorted sequence
pub fn reference_lower<T: Ord>(sorted: &[T], key: &T) -> usize {
    sorted.partition_point(|value| value < key)
}

/// Reference higher bound on the plain sorted sequence
pub fn reference_higher<T: Ord>(sorted: &[T], key: &T) -> usize {
    sorted.partition_point(|value| value <= key)
}

/// Translate a CFS position into the matching index of the sorted sequence
pub fn rank(cfs_len: usize, position: usize) -> usize {
    sorted_rank(cfs_len, position)
}
