//! Tree shape oracle
//!
//! A complete binary tree with n nodes is fully determined by n: every level
//! is full except the last, which fills left to right. The oracle answers how
//! many of the n nodes go below the root's left and right child.

/// Height of the largest perfect tree that fits in `n` nodes.
///
/// Largest h with 2^h - 1 <= n.
#[inline]
pub fn perfect_height(n: usize) -> u32 {
    // n + 1 only overflows for usize::MAX, itself a perfect tree
    n.checked_add(1).map_or(usize::BITS, usize::ilog2)
}

/// Number of levels of the complete tree holding `n` nodes.
#[inline]
pub fn levels(n: usize) -> u32 {
    if n == 0 {
        0
    } else {
        n.ilog2() + 1
    }
}

/// Split a subtree of `n` nodes into `(left, right)` child subtree sizes.
///
/// The left child receives a perfect tree of height h - 1 plus as much of the
/// partially filled bottom level as fits under it (at most 2^(h-1) nodes);
/// the right child takes the remainder. `left + right + 1 == n` for n >= 1,
/// and `split_sizes(0) == (0, 0)`.
///
/// ```
/// use cfsearch::tree::split_sizes;
///
/// assert_eq!(split_sizes(3), (1, 1));
/// assert_eq!(split_sizes(10), (6, 3));
/// assert_eq!(split_sizes(12), (7, 4));
/// ```
pub fn split_sizes(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }

    let height = perfect_height(n);
    let perfect = usize::MAX >> (usize::BITS - height);
    // Bottom-level slots available under the left child
    let left_capacity = 1usize << (height - 1);

    let excess = n - perfect;
    let left = (left_capacity - 1) + excess.min(left_capacity);

    (left, n - 1 - left)
}
