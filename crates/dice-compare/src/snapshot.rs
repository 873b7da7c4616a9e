//! Distribution snapshots for empirical vs theoretical comparison.
//!
//! Snapshots capture a normalized view of a frequency distribution that can
//! be compared regardless of how it was produced (random sampling or
//! exhaustive enumeration).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One frequency distribution of roll totals at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSnapshot {
    /// Descriptive label (e.g. "2d6 sampled" or "2d6 enumerated")
    pub label: String,
    /// Seed used to produce the distribution; None for enumerated ones
    pub seed: Option<u64>,
    /// Number of rolls or combinations aggregated
    pub samples: u64,
    /// Occurrence count per total
    pub frequencies: BTreeMap<u64, u64>,
}

impl DistributionSnapshot {
    /// Capture a distribution from its count map.
    ///
    /// `samples` is derived from the counts, keeping the total-count
    /// invariant intact by construction.
    pub fn new(
        label: impl Into<String>,
        seed: Option<u64>,
        frequencies: BTreeMap<u64, u64>,
    ) -> Self {
        let samples = frequencies.values().sum();
        Self {
            label: label.into(),
            seed,
            samples,
            frequencies,
        }
    }

    /// Whether `total` appears in this distribution's support.
    pub fn contains(&self, total: u64) -> bool {
        self.frequencies.contains_key(&total)
    }

    /// Relative frequency of `total`; 0.0 when unobserved or empty.
    pub fn share(&self, total: u64) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.frequencies.get(&total).copied().unwrap_or(0) as f64 / self.samples as f64
    }
}
