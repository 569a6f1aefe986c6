mod common;

use cfsearch::tree::split_sizes;
use cfsearch::{layout_into, to_cfs, transform_to_cfs, valid_heap};
use common::in_order_values;
use test_case::test_case;

#[test_case(0, (0, 0) ; "empty")]
#[test_case(1, (0, 0) ; "single")]
#[test_case(2, (1, 0) ; "two")]
#[test_case(3, (1, 1) ; "perfect of three")]
#[test_case(8, (4, 3) ; "power of two")]
#[test_case(10, (6, 3) ; "excess of three")]
#[test_case(12, (7, 4) ; "excess of five")]
#[test_case(15, (7, 7) ; "perfect of fifteen")]
fn shape_oracle(n: usize, expected: (usize, usize)) {
    assert_eq!(split_sizes(n), expected);
}

#[test_case(vec![], vec![] ; "empty")]
#[test_case(vec![77], vec![77] ; "single element")]
#[test_case(vec![77, 88], vec![88, 77] ; "two elements")]
#[test_case(vec![77, 88, 99], vec![88, 77, 99] ; "three elements")]
#[test_case((0..10).collect(), vec![6, 3, 8, 1, 5, 7, 9, 0, 2, 4] ; "ten elements")]
#[test_case((0..8).collect(), vec![4, 2, 6, 1, 3, 5, 7, 0] ; "exactly power of two")]
#[test_case((0..12).collect(), vec![7, 3, 10, 1, 5, 9, 11, 0, 2, 4, 6, 8] ; "deficit of three to fifteen")]
#[test_case(vec![1, 4, 4, 6, 8, 8, 10], vec![6, 4, 8, 1, 4, 8, 10] ; "with repetitions")]
fn conversion(input: Vec<i32>, expected: Vec<i32>) {
    let mut output: Vec<i32> = Vec::new();
    transform_to_cfs(&mut output, &input);
    assert_eq!(output, expected);

    let mut in_place = vec![0; input.len()];
    layout_into(&mut in_place, &input);
    assert_eq!(in_place, expected);
}

#[test]
fn run_of_equal_elements_is_valid() {
    let cfs = to_cfs(&[0, 1, 1, 1, 1, 2]);
    assert!(valid_heap(&cfs));
    assert_eq!(in_order_values(&cfs), vec![0, 1, 1, 1, 1, 2]);
}

#[test]
fn every_size_up_to_a_thousand_round_trips() {
    for n in 0..1000u32 {
        let sorted: Vec<u32> = (0..n).collect();
        let cfs = to_cfs(&sorted);
        assert!(valid_heap(&cfs), "invalid layout for n = {}", n);
        assert_eq!(in_order_values(&cfs), sorted, "in-order mismatch for n = {}", n);
    }
}

#[test]
fn equal_keys_keep_their_order() {
    // Elements compare by the number only; the tag records input order
    let sorted: Vec<(u8, char)> = vec![(1, 'a'), (2, 'a'), (2, 'b'), (2, 'c'), (3, 'a')];
    let cfs = to_cfs(&sorted);
    assert_eq!(in_order_values(&cfs), sorted);
}
