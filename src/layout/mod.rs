//! Layout builder: sorted sequence to cache-friendly search (CFS) order
//!
//! The sorted input is consumed through a worklist of construction tasks,
//! each a [`TreeNode`] naming a sorted sub-range and the array position of
//! its subtree root. A task places its pivot and pushes its non-empty
//! children. Tasks write disjoint positions, so LIFO order is as good as any
//! and keeps the worklist at O(log n) entries.

use crate::tree::{sorted_rank, TreeNode};

/// Drive the worklist for `len` elements, calling `place(position, sorted_index)`
/// exactly once per output position.
fn for_each_placement<F>(len: usize, mut place: F)
where
    F: FnMut(usize, usize),
{
    if len == 0 {
        return;
    }

    let mut worklist = Vec::with_capacity(crate::tree::levels(len) as usize + 1);
    worklist.push(TreeNode::root(len));

    while let Some(task) = worklist.pop() {
        place(task.position, task.pivot());

        let (left, right) = task.children();
        worklist.extend(right);
        worklist.extend(left);
    }
}

/// Write the CFS layout of `sorted` into `out`.
///
/// `out` is caller-owned storage of the same length; its previous contents
/// are overwritten. Only O(log n) auxiliary state is used.
///
/// # Panics
///
/// Panics if `out.len() != sorted.len()`.
pub fn layout_into<T: Clone>(out: &mut [T], sorted: &[T]) {
    assert_eq!(
        out.len(),
        sorted.len(),
        "output length must match input length"
    );
    for_each_placement(sorted.len(), |position, index| {
        out[position].clone_from(&sorted[index]);
    });
}

/// Append the CFS layout of `sorted` to `sink`.
///
/// Exactly `sorted.len()` elements are appended, in array order. Each
/// position's source is re-derived from its root-to-node path, so no state
/// beyond the current position is kept; the price is O(n log n) time. Use
/// [`layout_into`] for the linear-time build into existing storage.
///
/// ```
/// let mut out: Vec<i32> = Vec::new();
/// cfsearch::transform_to_cfs(&mut out, &[77, 88, 99]);
/// assert_eq!(out, vec![88, 77, 99]);
/// ```
pub fn transform_to_cfs<T, E>(sink: &mut E, sorted: &[T])
where
    T: Clone,
    E: Extend<T>,
{
    let len = sorted.len();
    sink.extend((0..len).map(|position| sorted[sorted_rank(len, position)].clone()));
}

/// CFS layout of `sorted` as a new vector.
pub fn to_cfs<T: Clone>(sorted: &[T]) -> Vec<T> {
    let mut out = sorted.to_vec();
    layout_into(&mut out, sorted);
    out
}

/// The layout permutation: entry `p` is the sorted index stored at position `p`.
pub fn source_indices(len: usize) -> Vec<usize> {
    let mut sources = vec![0; len];
    for_each_placement(len, |position, index| sources[position] = index);
    sources
}
