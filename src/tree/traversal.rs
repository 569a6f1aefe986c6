//! Implicit tree traversal
//!
//! Nothing but positions is ever stored: a root-to-node path is read off the
//! bits of `position + 1`, and in-order traversal keeps a stack of at most
//! one position per level.

use super::{depth, left_child, right_child};

/// Which child a path step descends into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards 2i + 1
    Left,

    /// Towards 2i + 2
    Right,
}

/// Root-to-node path of a position, as a sequence of directions
#[derive(Debug, Clone)]
pub struct Path {
    target: usize,
    remaining: u32,
}

/// Directions leading from the root (position 0) to `position`
///
/// The root itself yields an empty path.
pub fn path_to(position: usize) -> Path {
    Path {
        target: position,
        remaining: depth(position),
    }
}

impl Iterator for Path {
    type Item = Direction;

    fn next(&mut self) -> Option<Direction> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Ancestor one level below the current one, ((target + 1) >> r) - 1
        // rearranged so it cannot overflow; left children are odd
        let ancestor = (self.target - ((1usize << self.remaining) - 1)) >> self.remaining;
        Some(if ancestor % 2 == 1 {
            Direction::Left
        } else {
            Direction::Right
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Path {}

/// In-order (sorted order) walk over a CFS array
///
/// Yields `(position, element)` pairs. Stack depth: O(log n).
#[derive(Debug, Clone)]
pub struct InOrder<'a, T> {
    cfs: &'a [T],
    stack: Vec<usize>,
    remaining: usize,
}

/// Walk `cfs` in sorted order
pub fn in_order<T>(cfs: &[T]) -> InOrder<'_, T> {
    let mut walk = InOrder {
        cfs,
        stack: Vec::with_capacity(super::levels(cfs.len()) as usize),
        remaining: cfs.len(),
    };
    walk.push_left_spine(0);
    walk
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut position: usize) {
        while position < self.cfs.len() {
            self.stack.push(position);
            position = left_child(position);
        }
    }

    /// Number of pending ancestors (current stack depth)
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.stack.pop()?;
        self.push_left_spine(right_child(position));
        self.remaining -= 1;
        Some((position, &self.cfs[position]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}
