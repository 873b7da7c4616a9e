//! Random sampling of dice rolls.
//!
//! All draws go through a caller-supplied [`DiceRng`], so a fixed seed
//! reproduces the exact sequence of rolls across runs.

use dice_rng::DiceRng;

use crate::dice::{Die, Roll};
use crate::error::DiceError;

/// Roll one validated die `num_dice` times into a single [`Roll`].
pub(crate) fn sample_roll(rng: &mut DiceRng, die: Die, num_dice: usize) -> Roll {
    Roll::new((0..num_dice).map(|_| die.roll(rng)).collect())
}

/// Roll `num_dice` fair dice with `faces` sides each, once.
///
/// Values are drawn independently and uniformly with replacement: the same
/// face may recur within one roll and across rolls.
pub fn roll_dice(rng: &mut DiceRng, faces: u32, num_dice: usize) -> Result<Roll, DiceError> {
    let die = Die::new(faces)?;
    if num_dice == 0 {
        return Err(DiceError::InvalidDiceCount(num_dice));
    }
    Ok(sample_roll(rng, die, num_dice))
}

/// Run `trials` rolls of `num_dice` dice using a caller-owned RNG.
///
/// The trial set is allocated up front; `trials == 0` yields an empty set.
pub fn simulate_with(
    rng: &mut DiceRng,
    faces: u32,
    num_dice: usize,
    trials: usize,
) -> Result<Vec<Roll>, DiceError> {
    let die = Die::new(faces)?;
    if num_dice == 0 {
        return Err(DiceError::InvalidDiceCount(num_dice));
    }

    let mut rolls = Vec::with_capacity(trials);
    for _ in 0..trials {
        rolls.push(sample_roll(rng, die, num_dice));
    }
    Ok(rolls)
}

/// Run `trials` rolls from a fresh RNG seeded with `seed`.
///
/// Two invocations with the same parameters produce identical trial sets.
pub fn simulate(
    faces: u32,
    num_dice: usize,
    trials: usize,
    seed: u64,
) -> Result<Vec<Roll>, DiceError> {
    let mut rng = DiceRng::new(seed);
    simulate_with(&mut rng, faces, num_dice, trials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_dice_rejects_invalid_parameters() {
        let mut rng = DiceRng::new(1);
        assert_eq!(
            roll_dice(&mut rng, 0, 2),
            Err(DiceError::InvalidFaceCount(0))
        );
        assert_eq!(
            roll_dice(&mut rng, 6, 0),
            Err(DiceError::InvalidDiceCount(0))
        );
    }

    #[test]
    fn test_roll_dice_cardinality_and_range() {
        let mut rng = DiceRng::new(42);
        for _ in 0..200 {
            let roll = roll_dice(&mut rng, 8, 3).unwrap();
            assert_eq!(roll.len(), 3);
            for &v in roll.values() {
                assert!(v >= 1 && v <= 8);
            }
        }
    }

    #[test]
    fn test_simulate_zero_trials_is_empty() {
        assert_eq!(simulate(6, 2, 0, 42).unwrap(), vec![]);
    }

    #[test]
    fn test_simulate_determinism() {
        let a = simulate(6, 2, 100, 123).unwrap();
        let b = simulate(6, 2, 100, 123).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
    }

    #[test]
    fn test_simulate_with_continues_one_stream() {
        // Two batches from one RNG must equal one batch of the combined size.
        let mut rng = DiceRng::new(7);
        let mut batched = simulate_with(&mut rng, 6, 2, 30).unwrap();
        batched.extend(simulate_with(&mut rng, 6, 2, 20).unwrap());

        let whole = simulate(6, 2, 50, 7).unwrap();
        assert_eq!(batched, whole);
    }
}
