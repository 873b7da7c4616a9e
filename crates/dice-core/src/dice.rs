//! Dice data model: a fair k-sided die and the outcome of one trial.

use dice_rng::DiceRng;
use serde::{Deserialize, Serialize};

use crate::error::DiceError;

/// A fair k-sided die. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    faces: u32,
}

impl Die {
    /// Create a die with the given number of faces.
    ///
    /// Fails with [`DiceError::InvalidFaceCount`] for zero faces.
    pub fn new(faces: u32) -> Result<Self, DiceError> {
        if faces == 0 {
            return Err(DiceError::InvalidFaceCount(faces));
        }
        Ok(Self { faces })
    }

    /// Number of faces on this die.
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Draw one uniformly distributed face value in 1..=faces.
    ///
    /// Each draw is independent of prior draws (with replacement).
    pub fn roll(&self, rng: &mut DiceRng) -> u32 {
        rng.rnd(self.faces)
    }
}

impl Default for Die {
    /// The conventional six-sided die.
    fn default() -> Self {
        Self { faces: 6 }
    }
}

/// The ordered face values produced by one trial, one value per die.
///
/// Not mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    values: Vec<u32>,
}

impl Roll {
    /// Wrap the face values of one trial.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Face values in die order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of dice rolled.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all face values.
    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| v as u64).sum()
    }
}

impl From<Vec<u32>> for Roll {
    fn from(values: Vec<u32>) -> Self {
        Self::new(values)
    }
}
