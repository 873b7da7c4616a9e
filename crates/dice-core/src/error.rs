//! Error types for dice construction and enumeration.

use thiserror::Error;

/// Errors raised when simulation parameters fail validation.
///
/// Every operation in this crate is total once its inputs validate, so this
/// is the only failure surface. Empty inputs (zero trials, empty roll
/// sequences) are not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("face count must be at least 1, got {0}")]
    InvalidFaceCount(u32),

    #[error("dice count must be at least 1, got {0}")]
    InvalidDiceCount(usize),

    #[error("combination space {faces}^{num_dice} does not fit in a u64")]
    CombinationOverflow { faces: u32, num_dice: usize },
}
