mod common;

use cfsearch::{find_violation, to_cfs, valid_heap, CfsIndex, IndexError};
use common::LOOKUP;

#[test]
fn empty_and_single_are_valid() {
    let empty: [i32; 0] = [];
    assert!(valid_heap(&empty));
    assert!(valid_heap(&[1]));
}

#[test]
fn general_validation() {
    assert!(valid_heap(&LOOKUP));
}

#[test]
fn invalid_lower_tree() {
    //     14
    //  6         18
    //  2   10    20# 22
    //  0 4 8  12 16
    let invalid20 = [14, 6, 18, 2, 10, 20, 22, 0, 4, 8, 12, 16];
    assert!(!valid_heap(&invalid20));
    assert_eq!(find_violation(&invalid20), Some(5));
}

#[test]
fn invalid_higher_tree() {
    //     14
    //  6          20
    //  2   12     18 22
    //  0 4 8  10# 16
    let invalid10 = [14, 6, 20, 2, 12, 18, 22, 0, 4, 8, 10, 16];
    assert!(!valid_heap(&invalid10));
    assert_eq!(find_violation(&invalid10), Some(10));
}

#[test]
fn parent_child_pairs_alone_are_not_enough() {
    // Every parent/child pair is ordered, but 15 is in the root's left
    // subtree and greater than the root
    let cfs = [14, 6, 20, 2, 15, 18, 22];
    assert!(!valid_heap(&cfs));
    assert_eq!(find_violation(&cfs), Some(4));
}

#[test]
fn index_rejects_broken_layouts() {
    let mut cfs = to_cfs(&(0..100).collect::<Vec<i32>>());
    cfs.swap(3, 4);
    assert!(matches!(
        CfsIndex::from_layout(cfs),
        Err(IndexError::InvalidLayout { .. })
    ));
}
