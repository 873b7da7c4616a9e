//! Comparison reporting — aggregates distribution diffs into
//! human-readable and machine-readable reports.

use serde::{Deserialize, Serialize};

use crate::diff::{FrequencyDiff, Severity, diff_distributions, total_variation};
use crate::snapshot::DistributionSnapshot;

/// Summary of one empirical-vs-theoretical comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Descriptive label for this report (e.g. "2d6 seed=123 100 trials").
    pub label: String,
    /// Seed of the observed distribution, if it was sampled.
    pub seed: Option<u64>,
    /// Rolls in the observed distribution.
    pub samples: u64,
    /// Combinations in the expected distribution.
    pub combinations: u64,
    /// Aggregate diff counts by severity.
    pub critical_count: u64,
    pub major_count: u64,
    pub minor_count: u64,
    /// Total variation distance between the two distributions.
    pub total_variation: f64,
    /// Per-total deviation details.
    pub diffs: Vec<FrequencyDiff>,
}

impl ComparisonReport {
    /// Compare `observed` against `expected` and summarize the deviations.
    pub fn build(
        label: impl Into<String>,
        observed: &DistributionSnapshot,
        expected: &DistributionSnapshot,
        tolerance: f64,
    ) -> Self {
        let diffs = diff_distributions(observed, expected, tolerance);

        let mut critical_count = 0;
        let mut major_count = 0;
        let mut minor_count = 0;
        for d in &diffs {
            match d.severity {
                Severity::Critical => critical_count += 1,
                Severity::Major => major_count += 1,
                Severity::Minor => minor_count += 1,
            }
        }

        Self {
            label: label.into(),
            seed: observed.seed,
            samples: observed.samples,
            combinations: expected.samples,
            critical_count,
            major_count,
            minor_count,
            total_variation: total_variation(observed, expected),
            diffs,
        }
    }

    /// True if the sampled distribution is consistent with the theoretical
    /// one: no impossible totals and no deviation beyond tolerance.
    pub fn passed(&self) -> bool {
        self.critical_count == 0 && self.major_count == 0
    }

    /// Serialize the full report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n============================================================");
        println!("Comparison Report: {}", self.label);
        match self.seed {
            Some(seed) => println!(
                "Seed: {}, Samples: {}, Combinations: {}",
                seed, self.samples, self.combinations
            ),
            None => println!(
                "Samples: {}, Combinations: {}",
                self.samples, self.combinations
            ),
        }
        println!(
            "Result: {}",
            if self.passed() { "PASS" } else { "FAIL" }
        );
        println!(
            "Diffs: {} critical, {} major, {} minor",
            self.critical_count, self.major_count, self.minor_count
        );
        println!("Total variation: {:.4}", self.total_variation);

        let show = self.diffs.len().min(10);
        if show > 0 {
            println!("\nFirst {} deviations:", show);
            for d in &self.diffs[..show] {
                println!("  {}", d);
            }
            if self.diffs.len() > show {
                println!("  ... and {} more", self.diffs.len() - show);
            }
        }

        println!("============================================================\n");
    }
}
