//! Distribution diffing with severity classification.
//!
//! Compares an observed (sampled) distribution against an expected
//! (enumerated) one key by key, producing a list of `FrequencyDiff`
//! entries with severity classification.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::snapshot::DistributionSnapshot;

/// How important a deviation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Severity::Minor => write!(f, "MINOR"),
            Severity::Major => write!(f, "MAJOR"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A single difference between two distributions at one total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyDiff {
    pub severity: Severity,
    /// Roll total the deviation occurs at.
    pub total: u64,
    pub observed_share: f64,
    pub expected_share: f64,
}

impl core::fmt::Display for FrequencyDiff {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] total {}: observed={:.4}, expected={:.4}",
            self.severity, self.total, self.observed_share, self.expected_share
        )
    }
}

/// Compare an observed distribution against the expected one.
///
/// Classification:
/// - Critical: observed total outside the expected support. The sampler
///   produced an impossible outcome.
/// - Major: relative frequency deviates from the expected share by more
///   than `tolerance`.
/// - Minor: expected total never observed (undersampling).
pub fn diff_distributions(
    observed: &DistributionSnapshot,
    expected: &DistributionSnapshot,
    tolerance: f64,
) -> Vec<FrequencyDiff> {
    let mut diffs = Vec::new();

    for &total in observed.frequencies.keys() {
        let observed_share = observed.share(total);
        let expected_share = expected.share(total);

        if !expected.contains(total) {
            diffs.push(FrequencyDiff {
                severity: Severity::Critical,
                total,
                observed_share,
                expected_share,
            });
        } else if (observed_share - expected_share).abs() > tolerance {
            diffs.push(FrequencyDiff {
                severity: Severity::Major,
                total,
                observed_share,
                expected_share,
            });
        }
    }

    for &total in expected.frequencies.keys() {
        if !observed.contains(total) {
            diffs.push(FrequencyDiff {
                severity: Severity::Minor,
                total,
                observed_share: 0.0,
                expected_share: expected.share(total),
            });
        }
    }

    diffs
}

/// Total variation distance between two distributions, in [0, 1].
pub fn total_variation(
    observed: &DistributionSnapshot,
    expected: &DistributionSnapshot,
) -> f64 {
    let mut totals: BTreeSet<u64> = observed.frequencies.keys().copied().collect();
    totals.extend(expected.frequencies.keys().copied());

    0.5 * totals
        .iter()
        .map(|&t| (observed.share(t) - expected.share(t)).abs())
        .sum::<f64>()
}
