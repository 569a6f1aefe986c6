//! Implicit complete binary tree over a flat array
//!
//! Positions are laid out breadth-first: the root is at 0, and position i has
//! children 2i + 1 and 2i + 2 whenever those are in bounds.
//!
//! The tree exists only as this indexing convention. The sorted sub-range
//! behind any position is recomputed from (len, position) through the shape
//! oracle whenever it is needed.

mod node;
mod shape;
mod traversal;

pub use node::TreeNode;
pub use shape::{levels, perfect_height, split_sizes};
pub use traversal::{in_order, path_to, Direction, InOrder, Path};

/// Left child position
///
/// Saturates at `usize::MAX`, which is never a valid position since no slice
/// holds more than `usize::MAX` elements.
#[inline]
pub const fn left_child(position: usize) -> usize {
    position.saturating_mul(2).saturating_add(1)
}

/// Right child position (saturating, as [`left_child`])
#[inline]
pub const fn right_child(position: usize) -> usize {
    position.saturating_mul(2).saturating_add(2)
}

/// Parent position; `None` for the root
#[inline]
pub const fn parent(position: usize) -> Option<usize> {
    if position == 0 {
        None
    } else {
        Some((position - 1) / 2)
    }
}

/// Level of a position (root is level 0)
#[inline]
pub fn depth(position: usize) -> u32 {
    position.checked_add(1).map_or(usize::BITS, usize::ilog2)
}

/// Sorted index of the element stored at `position` in a layout of `len`
///
/// The end sentinel (`position >= len`) maps to `len`, so the difference of
/// two ranks counts the elements between two search results.
pub fn sorted_rank(len: usize, position: usize) -> usize {
    TreeNode::locate(len, position).map_or(len, |node| node.pivot())
}

/// Shape of a CFS layout of a given length (implicit)
///
/// Never materialized - all navigation via arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CfsShape {
    len: usize,
}

impl CfsShape {
    /// Shape of a layout holding `len` elements
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the layout is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Root node, if any
    pub fn root(&self) -> Option<TreeNode> {
        (self.len > 0).then(|| TreeNode::root(self.len))
    }

    /// Number of levels: the worst-case comparisons per search
    pub fn height(&self) -> u32 {
        levels(self.len)
    }

    /// Subtree handle of `position`
    pub fn locate(&self, position: usize) -> Option<TreeNode> {
        TreeNode::locate(self.len, position)
    }

    /// Sorted index stored at `position` (`len` for the end sentinel)
    pub fn sorted_rank(&self, position: usize) -> usize {
        sorted_rank(self.len, position)
    }
}
