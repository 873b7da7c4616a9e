//! Exhaustive enumeration of dice outcome combinations.
//!
//! Walks the full Cartesian product {1..faces}^num_dice lazily, so the
//! theoretical distribution of any roll can be computed without sampling
//! error. Time is O(faces^num_dice); iterator state is O(num_dice).

use serde::{Deserialize, Serialize};

use crate::dice::Roll;
use crate::error::DiceError;

/// The space of all outcome combinations for a set of identical dice.
///
/// Construction validates that the space size `faces^num_dice` fits in a
/// u64; larger spaces are rejected rather than enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationSpace {
    faces: u32,
    num_dice: usize,
    len: u64,
}

impl CombinationSpace {
    pub fn new(faces: u32, num_dice: usize) -> Result<Self, DiceError> {
        if faces == 0 {
            return Err(DiceError::InvalidFaceCount(faces));
        }
        if num_dice == 0 {
            return Err(DiceError::InvalidDiceCount(num_dice));
        }

        let len = u32::try_from(num_dice)
            .ok()
            .and_then(|exp| (faces as u64).checked_pow(exp))
            .ok_or(DiceError::CombinationOverflow { faces, num_dice })?;

        Ok(Self {
            faces,
            num_dice,
            len,
        })
    }

    pub fn faces(&self) -> u32 {
        self.faces
    }

    pub fn num_dice(&self) -> usize {
        self.num_dice
    }

    /// Number of combinations, `faces^num_dice`.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start a fresh walk over every combination.
    ///
    /// The walk is deterministic (lexicographic, last die varies fastest)
    /// and restartable; each combination appears exactly once. Consumers
    /// should rely only on completeness and uniqueness, not on the order.
    pub fn iter(&self) -> Combinations {
        Combinations {
            faces: self.faces,
            current: Some(vec![1; self.num_dice]),
            remaining: self.len,
        }
    }
}

impl IntoIterator for &CombinationSpace {
    type Item = Roll;
    type IntoIter = Combinations;

    fn into_iter(self) -> Combinations {
        self.iter()
    }
}

/// Lazy iterator over a [`CombinationSpace`], odometer style.
#[derive(Debug, Clone)]
pub struct Combinations {
    faces: u32,
    /// Next combination to yield; None once exhausted.
    current: Option<Vec<u32>>,
    remaining: u64,
}

impl Iterator for Combinations {
    type Item = Roll;

    fn next(&mut self) -> Option<Roll> {
        let digits = self.current.as_mut()?;
        let roll = Roll::new(digits.clone());
        self.remaining -= 1;

        // Advance the rightmost die that has faces left, resetting the
        // positions after it.
        let mut pos = digits.len();
        let mut advanced = false;
        while pos > 0 {
            pos -= 1;
            if digits[pos] < self.faces {
                digits[pos] += 1;
                for d in digits[pos + 1..].iter_mut() {
                    *d = 1;
                }
                advanced = true;
                break;
            }
        }
        if !advanced {
            self.current = None;
        }

        Some(roll)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Enumerate every combination of `num_dice` dice with `faces` sides.
pub fn enumerate_all(faces: u32, num_dice: usize) -> Result<Combinations, DiceError> {
    Ok(CombinationSpace::new(faces, num_dice)?.iter())
}
