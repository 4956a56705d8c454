//! Tests for merging two sorted lazy sequences

use std::cell::Cell;

use lazyseq::util::testing;
use lazyseq::{merge_sorted_sequences, SortedMerge};
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_odds_and_evens_when_merged_then_fully_sorted() {
    let merged: Vec<i64> = merge_sorted_sequences(|| (1..).step_by(2), || (2..).step_by(2))
        .take(8)
        .collect();
    assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn given_single_value_and_infinite_evens_when_merged_then_drains_second_source() {
    let merged: Vec<i64> = merge_sorted_sequences(|| [0], || (2..).step_by(2))
        .take(5)
        .collect();
    assert_eq!(merged, vec![0, 2, 4, 6, 8]);
}

#[test]
fn given_infinite_odds_and_single_negative_when_merged_then_drains_first_source() {
    let merged: Vec<i64> = merge_sorted_sequences(|| (1..).step_by(2), || [-1])
        .take(4)
        .collect();
    assert_eq!(merged, vec![-1, 1, 3, 5]);
}

#[rstest]
#[case::both_empty(vec![], vec![], vec![])]
#[case::first_empty(vec![], vec![1, 2, 3], vec![1, 2, 3])]
#[case::second_empty(vec![4, 5], vec![], vec![4, 5])]
#[case::duplicates_kept(vec![1, 2, 3], vec![1, 2, 3], vec![1, 1, 2, 2, 3, 3])]
#[case::second_smaller(vec![2, 4], vec![1, 3], vec![1, 2, 3, 4])]
#[case::uneven_tail(vec![1, 3], vec![2, 4, 6, 8], vec![1, 2, 3, 4, 6, 8])]
fn given_finite_sources_when_merged_then_expected_output(
    #[case] first: Vec<i64>,
    #[case] second: Vec<i64>,
    #[case] expected: Vec<i64>,
) {
    let merged: Vec<i64> = SortedMerge::new(first, second).collect();
    assert_eq!(merged, expected);
}

#[test]
fn given_unpaired_sources_when_merged_then_pairs_advance_in_lockstep() {
    // Both sources advance after every pair, so 5 comes out before 2
    let merged: Vec<i64> = SortedMerge::new(vec![1, 2], vec![5, 6]).collect();
    assert_eq!(merged, vec![1, 5, 2, 6]);
}

#[test]
fn given_float_sources_when_merged_then_uses_partial_order() {
    let merged: Vec<f64> = SortedMerge::new(vec![0.5, 1.5], vec![1.0, 2.0]).collect();
    assert_eq!(merged, vec![0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn given_factories_when_merge_created_then_each_called_exactly_once() {
    let calls = Cell::new(0);
    let merged = merge_sorted_sequences(
        || {
            calls.set(calls.get() + 1);
            vec![1, 3]
        },
        || {
            calls.set(calls.get() + 1);
            vec![2, 4]
        },
    );
    assert_eq!(calls.get(), 2);
    assert_eq!(merged.collect::<Vec<i32>>(), vec![1, 2, 3, 4]);
    assert_eq!(calls.get(), 2);
}

#[test]
fn given_exhausted_merge_when_pulling_again_then_returns_none_indefinitely() {
    let mut merged = SortedMerge::new(vec![1], vec![2]);
    assert_eq!(merged.by_ref().count(), 2);
    for _ in 0..5 {
        assert_eq!(merged.next(), None);
    }
}
