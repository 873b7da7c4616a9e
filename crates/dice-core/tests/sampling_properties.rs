//! Property-based tests for the sampler and aggregator invariants.

use dice_core::{aggregate, enumerate_all, simulate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sampled_faces_stay_in_range(
        faces in 1u32..=60,
        num_dice in 1usize..=6,
        seed in any::<u64>(),
    ) {
        let rolls = simulate(faces, num_dice, 32, seed).unwrap();
        prop_assert_eq!(rolls.len(), 32);
        for roll in &rolls {
            prop_assert_eq!(roll.len(), num_dice);
            for &v in roll.values() {
                prop_assert!(v >= 1 && v <= faces);
            }
        }
    }

    #[test]
    fn aggregated_counts_sum_to_trials(
        trials in 0usize..200,
        seed in any::<u64>(),
    ) {
        let rolls = simulate(6, 2, trials, seed).unwrap();
        let table = aggregate(&rolls, |r| r.total());
        prop_assert_eq!(table.total(), trials as u64);
    }

    #[test]
    fn same_seed_reproduces_the_trial_set(seed in any::<u64>()) {
        let a = simulate(6, 3, 50, seed).unwrap();
        let b = simulate(6, 3, 50, seed).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn aggregation_is_invariant_under_permutation(seed in any::<u64>()) {
        let rolls = simulate(6, 2, 60, seed).unwrap();
        let mut reversed = rolls.clone();
        reversed.reverse();

        let a = aggregate(&rolls, |r| r.total());
        let b = aggregate(&reversed, |r| r.total());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn enumeration_count_matches_space_size(
        faces in 1u32..=8,
        num_dice in 1usize..=4,
    ) {
        let count = enumerate_all(faces, num_dice).unwrap().count() as u64;
        prop_assert_eq!(count, (faces as u64).pow(num_dice as u32));
    }

    #[test]
    fn enumerated_totals_span_the_full_range(
        faces in 1u32..=6,
        num_dice in 1usize..=4,
    ) {
        let table = aggregate(enumerate_all(faces, num_dice).unwrap(), |r| r.total());
        let lo = num_dice as u64;
        let hi = num_dice as u64 * faces as u64;
        prop_assert!(table.count(lo) > 0);
        prop_assert!(table.count(hi) > 0);
        for (total, _) in table.iter() {
            prop_assert!(total >= lo && total <= hi);
        }
    }
}
