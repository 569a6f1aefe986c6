//! # Cache-Friendly Search Layout
//!
//! This library stores a sorted sequence as a complete binary search tree in
//! breadth-first order (the CFS layout) and searches it by descending the
//! implicit tree.
//!
//! ## Core Algorithm
//!
//! 1. **Shape oracle**: for a subtree of n elements, derive how many land in
//!    the left and right child under the complete-tree shape
//! 2. **Layout builder**: place each sub-range's weighted median at its
//!    breadth-first position, driven by a worklist of O(log n) tasks
//! 3. **Descent search**: position i has children 2i + 1 and 2i + 2, so every
//!    query reads the first few cache lines of the array before anything else
//! 4. **Validator**: interval check of the full ordering invariant
//!
//! Result: O(log n) comparisons per query, with the hot top levels of the
//! tree packed together at the front of the array.
//!
//! ## Usage Example
//!
//! ```
//! use cfsearch::{cfs_lower_bound, to_cfs, valid_heap, CfsIndex};
//!
//! let cfs = to_cfs(&[1, 4, 4, 6, 8, 8, 10]);
//! assert_eq!(cfs, vec![6, 4, 8, 1, 4, 8, 10]);
//! assert!(valid_heap(&cfs));
//! assert_eq!(cfs_lower_bound(&cfs, &4), 1);
//!
//! let index = CfsIndex::from_sorted(vec![1, 4, 4, 6, 8, 8, 10])?;
//! assert_eq!(index.count(&8), 2);
//! # Ok::<(), cfsearch::IndexError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod tree;     // Implicit tree shape and navigation
pub mod layout;   // Sorted input to CFS order
pub mod search;   // Lower/higher/equal-range descent
pub mod validate; // Ordering invariant check

// Re-exports for convenience
pub use layout::{layout_into, source_indices, to_cfs, transform_to_cfs};
pub use search::{
    cfs_equal_range, cfs_equal_range_by, cfs_equal_range_by_key, cfs_higher_bound,
    cfs_higher_bound_by, cfs_higher_bound_by_key, cfs_lower_bound, cfs_lower_bound_by,
    cfs_lower_bound_by_key,
};
pub use tree::{CfsShape, TreeNode};
pub use validate::{find_violation, find_violation_by, valid_heap, valid_heap_by};

use std::borrow::Borrow;

use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while building a [`CfsIndex`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Input handed to the builder was not in non-descending order
    #[error("input is not sorted: element {position} is greater than element {}", .position + 1)]
    Unsorted {
        /// Index of the first element greater than its successor
        position: usize,
    },

    /// A layout violates the search-tree ordering invariant
    #[error("layout violates the search-tree ordering at position {position}")]
    InvalidLayout {
        /// First violating position, in pre-order
        position: usize,
    },
}

/// Checks performed while building an index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Reject input that is not sorted (O(n) scan)
    pub check_sorted: bool,

    /// Re-validate the produced layout (O(n) walk)
    pub verify_layout: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            check_sorted: true,
            verify_layout: false,
        }
    }
}

impl IndexConfig {
    /// Check both the input and the produced layout
    pub fn strict() -> Self {
        Self {
            check_sorted: true,
            verify_layout: true,
        }
    }

    /// Trust the caller: no checks at all
    pub fn unchecked() -> Self {
        Self {
            check_sorted: false,
            verify_layout: false,
        }
    }
}

/// Immutable sorted index stored in CFS layout
///
/// Built once, queried many times. Positions returned by queries index into
/// [`as_slice`](Self::as_slice); `len()` is the end sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CfsIndex<T> {
    cfs: Vec<T>,
}

impl<T: Ord + Clone> CfsIndex<T> {
    /// Build from sorted values with the default checks
    pub fn from_sorted(values: Vec<T>) -> Result<Self, IndexError> {
        Self::build(values, &IndexConfig::default())
    }

    /// Sort `values`, then build
    pub fn from_unsorted(mut values: Vec<T>) -> Self {
        values.sort();
        Self::assemble(&values)
    }

    /// Build from sorted values under `config`
    pub fn build(values: Vec<T>, config: &IndexConfig) -> Result<Self, IndexError> {
        if config.check_sorted {
            if let Some(position) = values.windows(2).position(|pair| pair[0] > pair[1]) {
                warn!(position, len = values.len(), "rejected unsorted input");
                return Err(IndexError::Unsorted { position });
            }
        }

        let index = Self::assemble(&values);

        if config.verify_layout {
            if let Some(position) = find_violation(&index.cfs) {
                warn!(position, "built layout failed verification");
                return Err(IndexError::InvalidLayout { position });
            }
        }

        Ok(index)
    }

    fn assemble(sorted: &[T]) -> Self {
        let cfs = to_cfs(sorted);
        debug!(
            len = cfs.len(),
            height = CfsShape::new(cfs.len()).height(),
            "built cache-friendly layout"
        );
        Self { cfs }
    }
}

impl<T: Ord> CfsIndex<T> {
    /// Adopt an existing layout after validating it
    pub fn from_layout(cfs: Vec<T>) -> Result<Self, IndexError> {
        match find_violation(&cfs) {
            Some(position) => {
                warn!(position, len = cfs.len(), "rejected invalid layout");
                Err(IndexError::InvalidLayout { position })
            }
            None => Ok(Self { cfs }),
        }
    }

    /// Position of the first element not less than `key`
    pub fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        cfs_lower_bound(&self.cfs, key)
    }

    /// Position of the first element greater than `key`
    pub fn higher_bound<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        cfs_higher_bound(&self.cfs, key)
    }

    /// `(lower_bound, higher_bound)` of `key`
    pub fn equal_range<Q>(&self, key: &Q) -> (usize, usize)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        cfs_equal_range(&self.cfs, key)
    }

    /// Number of elements equal to `key`
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (lower, higher) = self.equal_range(key);
        self.sorted_rank(higher).saturating_sub(self.sorted_rank(lower))
    }

    /// Whether an element equal to `key` is present
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.ceiling(key)
            .is_some_and(|element| <T as Borrow<Q>>::borrow(element) == key)
    }

    /// Smallest element not less than `key`
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.cfs.get(self.lower_bound(key))
    }

    /// Smallest element greater than `key`
    pub fn successor<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.cfs.get(self.higher_bound(key))
    }
}

impl<T> CfsIndex<T> {
    /// Number of elements
    pub fn len(&self) -> usize {
        self.cfs.len()
    }

    /// Whether the index holds no elements
    pub fn is_empty(&self) -> bool {
        self.cfs.is_empty()
    }

    /// Element at an array position
    pub fn get(&self, position: usize) -> Option<&T> {
        self.cfs.get(position)
    }

    /// The layout itself
    pub fn as_slice(&self) -> &[T] {
        &self.cfs
    }

    /// Levels of the implicit tree (worst-case comparisons per query)
    pub fn height(&self) -> u32 {
        CfsShape::new(self.cfs.len()).height()
    }

    /// Sorted index of the element at `position` (`len()` for the end sentinel)
    pub fn sorted_rank(&self, position: usize) -> usize {
        tree::sorted_rank(self.cfs.len(), position)
    }

    /// Elements in sorted order
    pub fn iter_sorted(&self) -> impl Iterator<Item = &T> + '_ {
        tree::in_order(&self.cfs).map(|(_, element)| element)
    }

    /// Give back the layout
    pub fn into_layout(self) -> Vec<T> {
        self.cfs
    }

    /// Give back the elements in sorted order
    pub fn into_sorted_vec(self) -> Vec<T> {
        let order: Vec<usize> = tree::in_order(&self.cfs).map(|(position, _)| position).collect();
        let mut slots: Vec<Option<T>> = self.cfs.into_iter().map(Some).collect();
        order
            .into_iter()
            .filter_map(|position| slots[position].take())
            .collect()
    }
}

impl<T> AsRef<[T]> for CfsIndex<T> {
    fn as_ref(&self) -> &[T] {
        &self.cfs
    }
}

impl<T: Ord + Clone> FromIterator<T> for CfsIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}
