//! dice-core: Dice simulation and frequency aggregation
//!
//! This crate contains the simulation core with no I/O dependencies.
//! It is designed to be pure and testable: every random draw flows through
//! an explicit, seedable [`DiceRng`] owned by the caller, so any sequence of
//! rolls can be reproduced from its seed.
//!
//! The core splits into a sampler (random trials), an enumeration engine
//! (exhaustive combination walk), and a frequency aggregator that reduces
//! either into a table of occurrence counts by roll total.

pub mod dice;
pub mod enumerate;
pub mod freq;
pub mod sampler;

mod error;
mod experiment;

pub use dice::{Die, Roll};
pub use enumerate::{CombinationSpace, Combinations, enumerate_all};
pub use error::DiceError;
pub use experiment::{Experiment, ExperimentResult};
pub use freq::{FrequencyTable, aggregate, group_and_reduce};
pub use sampler::{roll_dice, simulate, simulate_with};

pub use dice_rng::DiceRng;
