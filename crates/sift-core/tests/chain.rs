//! Chain contract properties.

use proptest::prelude::*;
use sift_core::chain::{Chain, Wherable};

fn is_subsequence(needle: &[i64], haystack: &[i64]) -> bool {
    let mut iter = haystack.iter();
    needle.iter().all(|item| iter.any(|other| other == item))
}

proptest! {
    #[test]
    fn where_by_keeps_original_order(items in prop::collection::vec(-100_i64..100, 0..50)) {
        let chain = Chain::new(items.clone());
        let kept = chain.where_by(|&n| n % 2 == 0);

        prop_assert!(is_subsequence(kept.items(), &items));
    }

    #[test]
    fn where_by_is_idempotent(items in prop::collection::vec(-100_i64..100, 0..50)) {
        let chain = Chain::new(items);
        let once = chain.where_by(|&n| n > 0);
        let twice = once.where_by(|&n| n > 0);

        prop_assert_eq!(once.items(), twice.items());
    }

    #[test]
    fn where_by_is_sound_and_complete(items in prop::collection::vec(-100_i64..100, 0..50)) {
        let chain = Chain::new(items.clone());
        let kept = chain.where_by(|&n| n >= 10);

        // Every kept item satisfies the predicate.
        prop_assert!(kept.items().iter().all(|&n| n >= 10));
        // Every satisfying item was kept.
        prop_assert_eq!(kept.count(), items.iter().filter(|&&n| n >= 10).count());
    }

    #[test]
    fn where_by_never_mutates_the_source(items in prop::collection::vec(-100_i64..100, 0..50)) {
        let chain = Chain::new(items.clone());
        let _ = chain.where_by(|&n| n < 0);

        prop_assert_eq!(chain.items(), items.as_slice());
    }
}

#[test]
fn chain_iterates_in_order() {
    let chain = Chain::new(vec![3, 1, 2]);
    let collected: Vec<i32> = chain.into_iter().collect();
    assert_eq!(collected, vec![3, 1, 2]);
}
