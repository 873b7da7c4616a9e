//! Experiment driver: paired empirical and theoretical distributions.
//!
//! An [`Experiment`] fixes the dice parameters once, validating them a
//! single time; every run after that is infallible. The empirical table
//! comes from seeded sampling, the theoretical one from full enumeration,
//! and both are exposed raw and normalized for an external presentation
//! layer to render.

use std::collections::BTreeMap;

use dice_rng::DiceRng;
use serde::{Deserialize, Serialize};

use crate::dice::Die;
use crate::enumerate::CombinationSpace;
use crate::error::DiceError;
use crate::freq::{FrequencyTable, aggregate};
use crate::sampler::sample_roll;

/// A fixed dice configuration to sample and enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    die: Die,
    space: CombinationSpace,
}

impl Experiment {
    /// Validate the configuration, including that the combination space
    /// fits in a u64.
    pub fn new(faces: u32, num_dice: usize) -> Result<Self, DiceError> {
        let die = Die::new(faces)?;
        let space = CombinationSpace::new(faces, num_dice)?;
        Ok(Self { die, space })
    }

    pub fn faces(&self) -> u32 {
        self.die.faces()
    }

    pub fn num_dice(&self) -> usize {
        self.space.num_dice()
    }

    /// Size of the combination space, `faces^num_dice`.
    pub fn combinations(&self) -> u64 {
        self.space.len()
    }

    /// Exact distribution of roll totals over the full combination space.
    pub fn theoretical(&self) -> FrequencyTable {
        aggregate(self.space.iter(), |roll| roll.total())
    }

    /// Sample `trials` rolls from a fresh RNG seeded with `seed` and pair
    /// the resulting empirical distribution with the theoretical one.
    pub fn run(&self, trials: usize, seed: u64) -> ExperimentResult {
        let mut rng = DiceRng::new(seed);
        let mut rolls = Vec::with_capacity(trials);
        for _ in 0..trials {
            rolls.push(sample_roll(&mut rng, self.die, self.num_dice()));
        }

        ExperimentResult {
            seed,
            trials: trials as u64,
            empirical: aggregate(&rolls, |roll| roll.total()),
            theoretical: self.theoretical(),
        }
    }
}

/// Outcome of one experiment run: both distributions plus the parameters
/// needed to reproduce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    seed: u64,
    trials: u64,
    empirical: FrequencyTable,
    theoretical: FrequencyTable,
}

impl ExperimentResult {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Distribution of sampled roll totals; counts sum to `trials`.
    pub fn empirical(&self) -> &FrequencyTable {
        &self.empirical
    }

    /// Exact distribution over the full combination space.
    pub fn theoretical(&self) -> &FrequencyTable {
        &self.theoretical
    }

    /// Sampled distribution as relative frequencies.
    pub fn empirical_shares(&self) -> BTreeMap<u64, f64> {
        self.empirical.shares()
    }

    /// Exact distribution as relative frequencies.
    pub fn theoretical_shares(&self) -> BTreeMap<u64, f64> {
        self.theoretical.shares()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theoretical_two_d6_matches_classical_distribution() {
        let experiment = Experiment::new(6, 2).unwrap();
        let table = experiment.theoretical();

        assert_eq!(experiment.combinations(), 36);
        assert_eq!(table.total(), 36);
        assert_eq!(table.count(2), 1);
        assert_eq!(table.count(7), 6);
        assert_eq!(table.count(12), 1);
        assert_eq!(table.count(1), 0);
        assert_eq!(table.count(13), 0);
    }

    #[test]
    fn test_run_is_reproducible() {
        let experiment = Experiment::new(6, 2).unwrap();
        let a = experiment.run(100, 123);
        let b = experiment.run(100, 123);
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_counts_sum_to_trials() {
        let experiment = Experiment::new(6, 2).unwrap();
        let result = experiment.run(100, 123);

        assert_eq!(result.trials(), 100);
        assert_eq!(result.empirical().total(), 100);
        for (total, _) in result.empirical().iter() {
            assert!(total >= 2 && total <= 12);
        }
    }

    #[test]
    fn test_zero_trials_pairs_empty_empirical_with_full_theoretical() {
        let experiment = Experiment::new(6, 2).unwrap();
        let result = experiment.run(0, 1);

        assert!(result.empirical().is_empty());
        assert!(result.empirical_shares().is_empty());
        assert_eq!(result.theoretical().total(), 36);
    }

    #[test]
    fn test_shares_normalize_counts() {
        let experiment = Experiment::new(6, 1).unwrap();
        let shares = experiment.run(0, 0).theoretical_shares();
        for face in 1..=6u64 {
            assert!((shares[&face] - 1.0 / 6.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rejects_oversized_configuration() {
        assert!(matches!(
            Experiment::new(6, 25),
            Err(DiceError::CombinationOverflow { .. })
        ));
    }
}
