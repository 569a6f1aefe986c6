//! Layout validator
//!
//! Checks the full CFS ordering invariant, not just parent/child pairs: every
//! position carries an admissible interval inherited from its ancestors, and
//! its element must fall inside it. Left children tighten the upper end to
//! the parent's element, right children the lower end. Bounds are inclusive,
//! so runs of equal keys are accepted.

use std::cmp::Ordering;

use crate::tree::{left_child, right_child};

/// Admissible interval for one position; `None` is unbounded.
struct Window<'a, T> {
    low: Option<&'a T>,
    high: Option<&'a T>,
}

fn violation_in<'a, T, F>(
    cfs: &'a [T],
    position: usize,
    window: Window<'a, T>,
    compare: &mut F,
) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if position >= cfs.len() {
        return None;
    }

    let element = &cfs[position];
    let below = window
        .low
        .is_some_and(|low| compare(element, low) == Ordering::Less);
    let above = window
        .high
        .is_some_and(|high| compare(element, high) == Ordering::Greater);
    if below || above {
        return Some(position);
    }

    let left = Window {
        low: window.low,
        high: Some(element),
    };
    if let Some(found) = violation_in(cfs, left_child(position), left, compare) {
        return Some(found);
    }

    let right = Window {
        low: Some(element),
        high: window.high,
    };
    violation_in(cfs, right_child(position), right, compare)
}

/// First position (in pre-order) whose element falls outside the interval
/// allowed by its ancestors, or `None` if the layout is valid.
pub fn find_violation_by<T, F>(cfs: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    violation_in(
        cfs,
        0,
        Window {
            low: None,
            high: None,
        },
        &mut compare,
    )
}

/// [`find_violation_by`] using the natural order.
pub fn find_violation<T: Ord>(cfs: &[T]) -> Option<usize> {
    find_violation_by(cfs, Ord::cmp)
}

/// Whether `cfs` satisfies the CFS ordering invariant under `compare`.
pub fn valid_heap_by<T, F>(cfs: &[T], compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    find_violation_by(cfs, compare).is_none()
}

/// Whether `cfs` satisfies the CFS ordering invariant.
///
/// ```
/// use cfsearch::valid_heap;
///
/// assert!(valid_heap(&[14, 6, 20, 2, 10, 18, 22, 0, 4, 8, 12, 16]));
/// assert!(!valid_heap(&[14, 6, 18, 2, 10, 20, 22, 0, 4, 8, 12, 16]));
/// ```
pub fn valid_heap<T: Ord>(cfs: &[T]) -> bool {
    find_violation(cfs).is_none()
}
