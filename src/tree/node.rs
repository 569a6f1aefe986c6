//! Implicit tree node representation
//!
//! Node = (offset, len, position): the sorted sub-range [offset, offset + len)
//! that occupies the subtree rooted at `position` of the CFS array.
//! Children computed via the shape oracle, (L, R) = split_sizes(len):
//!   Left child:  (offset, L, 2 * position + 1)
//!   Right child: (offset + L + 1, R, 2 * position + 2)
//! The node itself holds sorted element offset + L.

use std::fmt;

use super::traversal::{path_to, Direction};
use super::{left_child, right_child, split_sizes};

/// Tree node (implicit - a sorted sub-range plus its array position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeNode {
    /// First sorted index covered by this subtree
    pub offset: usize,

    /// Number of elements in this subtree
    pub len: usize,

    /// Position of the subtree root in the CFS array
    pub position: usize,
}

impl TreeNode {
    /// Create root spanning the whole sorted input of `len` elements
    pub fn root(len: usize) -> Self {
        Self {
            offset: 0,
            len,
            position: 0,
        }
    }

    /// Check if leaf (single element)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.len == 1
    }

    /// Sorted index of the element stored at `position`
    ///
    /// The (L+1)-th smallest of the sub-range, a weighted median.
    #[inline]
    pub fn pivot(&self) -> usize {
        self.offset + split_sizes(self.len).0
    }

    /// Get children via the shape oracle; empty subtrees are `None`
    pub fn children(&self) -> (Option<TreeNode>, Option<TreeNode>) {
        let (left_len, right_len) = split_sizes(self.len);

        let left = (left_len > 0).then(|| TreeNode {
            offset: self.offset,
            len: left_len,
            position: left_child(self.position),
        });
        let right = (right_len > 0).then(|| TreeNode {
            offset: self.offset + left_len + 1,
            len: right_len,
            position: right_child(self.position),
        });

        (left, right)
    }

    /// Single child in the given direction
    pub fn child(&self, direction: Direction) -> Option<TreeNode> {
        let (left, right) = self.children();
        match direction {
            Direction::Left => left,
            Direction::Right => right,
        }
    }

    /// Recompute the node at `position` of a layout of `len` elements
    ///
    /// Walks the root-to-node path, re-deriving sub-ranges on the way down.
    /// Time: O(log len), no allocation. `None` if `position >= len`.
    pub fn locate(len: usize, position: usize) -> Option<TreeNode> {
        if position >= len {
            return None;
        }

        let mut node = TreeNode::root(len);
        for direction in path_to(position) {
            node = node.child(direction)?;
        }
        Some(node)
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} [{}, {})",
            self.position,
            self.offset,
            self.offset + self.len
        )
    }
}
