//! Search engine over a CFS layout
//!
//! Every query descends from the root, touching one element per level. Only
//! the ordering of element against key is consulted (no equality shortcut),
//! which keeps results exact in the presence of duplicate keys. Positions are
//! array indices; "not found" is the end sentinel `cfs.len()`.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::tree::{left_child, right_child};

/// Descend the implicit tree, going right while `goes_right(element)` holds
/// and recording every position where it does not.
#[inline]
fn descend<T, F>(cfs: &[T], mut goes_right: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let len = cfs.len();
    let mut candidate = len;
    let mut position = 0;

    while position < len {
        if goes_right(&cfs[position]) {
            position = right_child(position);
        } else {
            candidate = position;
            position = left_child(position);
        }
    }

    candidate
}

/// Position of the first element (in sorted order) not less than the key.
///
/// `compare` orders an element against the key, as in
/// [`slice::binary_search_by`].
pub fn cfs_lower_bound_by<T, F>(cfs: &[T], mut compare: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    descend(cfs, |element| compare(element) == Ordering::Less)
}

/// Position of the first element (in sorted order) greater than the key.
pub fn cfs_higher_bound_by<T, F>(cfs: &[T], mut compare: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    descend(cfs, |element| compare(element) != Ordering::Greater)
}

/// `(lower, higher)` bounds under `compare`; two independent descents.
pub fn cfs_equal_range_by<T, F>(cfs: &[T], mut compare: F) -> (usize, usize)
where
    F: FnMut(&T) -> Ordering,
{
    let lower = cfs_lower_bound_by(cfs, &mut compare);
    let higher = cfs_higher_bound_by(cfs, &mut compare);
    (lower, higher)
}

/// Position of the first element not less than `key`, or `cfs.len()`.
///
/// ```
/// use cfsearch::cfs_lower_bound;
///
/// let cfs = [14, 6, 20, 2, 10, 18, 22, 0, 4, 8, 12, 16];
/// assert_eq!(cfs[cfs_lower_bound(&cfs, &13)], 14);
/// assert_eq!(cfs_lower_bound(&cfs, &23), cfs.len());
/// ```
pub fn cfs_lower_bound<T, Q>(cfs: &[T], key: &Q) -> usize
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    cfs_lower_bound_by(cfs, |element| <T as Borrow<Q>>::borrow(element).cmp(key))
}

/// Position of the first element greater than `key`, or `cfs.len()`.
pub fn cfs_higher_bound<T, Q>(cfs: &[T], key: &Q) -> usize
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    cfs_higher_bound_by(cfs, |element| <T as Borrow<Q>>::borrow(element).cmp(key))
}

/// Half-open span `[lower_bound, higher_bound)` of elements equal to `key`.
///
/// The span is in sorted order, not array order: use
/// [`sorted_rank`](crate::tree::sorted_rank) to measure it.
pub fn cfs_equal_range<T, Q>(cfs: &[T], key: &Q) -> (usize, usize)
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    cfs_equal_range_by(cfs, |element| <T as Borrow<Q>>::borrow(element).cmp(key))
}

/// Lower bound on a key extracted from each element.
pub fn cfs_lower_bound_by_key<T, B, F>(cfs: &[T], key: &B, mut f: F) -> usize
where
    F: FnMut(&T) -> B,
    B: Ord,
{
    cfs_lower_bound_by(cfs, |element| f(element).cmp(key))
}

/// Higher bound on a key extracted from each element.
pub fn cfs_higher_bound_by_key<T, B, F>(cfs: &[T], key: &B, mut f: F) -> usize
where
    F: FnMut(&T) -> B,
    B: Ord,
{
    cfs_higher_bound_by(cfs, |element| f(element).cmp(key))
}

/// Equal range on a key extracted from each element.
pub fn cfs_equal_range_by_key<T, B, F>(cfs: &[T], key: &B, mut f: F) -> (usize, usize)
where
    F: FnMut(&T) -> B,
    B: Ord,
{
    cfs_equal_range_by(cfs, |element| f(element).cmp(key))
}
