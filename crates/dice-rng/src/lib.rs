//! Seeded random number generation for dice simulation.
//!
//! Uses a seeded ChaCha RNG so that every value stream is reproducible from
//! its seed. Call tracing records each draw for debugging divergences
//! between runs that were expected to be identical.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// An RNG call trace entry for debugging divergences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RngTraceEntry {
    /// Sequence number (0-indexed)
    pub seq: u64,
    /// Function name (e.g. "rn2", "rnd")
    pub func: &'static str,
    /// Argument (modulus or die sides)
    pub arg: u64,
    /// Result value
    pub result: u64,
}

/// Dice random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Note: RNG state is not serialized - a deserialized generator restarts
/// its stream from the original seed.
#[derive(Debug, Clone)]
pub struct DiceRng {
    rng: ChaCha8Rng,
    seed: u64,
    /// Total number of draws made (for tracing)
    call_count: u64,
    /// If true, record all calls into trace log
    tracing: bool,
    /// Trace log (only populated when tracing is true)
    trace: Vec<RngTraceEntry>,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for DiceRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DiceRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(DiceRng::new(seed))
    }
}

impl DiceRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            call_count: 0,
            tracing: false,
            trace: Vec::new(),
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a random value in 0..n
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let res = self.rng.gen_range(0..n);
        self.record("rn2", n, res);
        res
    }

    /// Returns a random value in 1..=n, one draw of an n-sided die
    ///
    /// Returns 0 if n is 0.
    pub fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let res = self.rng.gen_range(1..=n);
        self.record("rnd", n, res);
        res
    }

    /// Roll n dice with m sides and sum them
    pub fn dice(&mut self, n: u32, m: u32) -> u32 {
        (0..n).map(|_| self.rnd(m)).sum()
    }

    fn record(&mut self, func: &'static str, arg: u32, result: u32) {
        if self.tracing {
            self.trace.push(RngTraceEntry {
                seq: self.call_count,
                func,
                arg: arg as u64,
                result: result as u64,
            });
        }
        self.call_count += 1;
    }

    /// Enable RNG tracing, clearing any previous trace
    pub fn enable_tracing(&mut self) {
        self.tracing = true;
        self.trace.clear();
    }

    /// Disable RNG tracing
    pub fn disable_tracing(&mut self) {
        self.tracing = false;
    }

    /// Get current RNG trace
    pub fn trace(&self) -> &[RngTraceEntry] {
        &self.trace
    }

    /// Total number of draws made since creation
    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

impl Default for DiceRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = DiceRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_rnd_bounds() {
        let mut rng = DiceRng::new(42);
        for _ in 0..1000 {
            let n = rng.rnd(6);
            assert!(n >= 1 && n <= 6);
        }
    }

    #[test]
    fn test_dice_sum_bounds() {
        let mut rng = DiceRng::new(42);
        for _ in 0..1000 {
            let n = rng.dice(2, 6);
            assert!(n >= 2 && n <= 12);
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = DiceRng::new(42);
        let mut rng2 = DiceRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rnd(100), rng2.rnd(100));
        }
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = DiceRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.rnd(0), 0);
        assert_eq!(rng.dice(0, 6), 0);
        assert_eq!(rng.dice(2, 0), 0);
    }

    #[test]
    fn test_trace_records_draws() {
        let mut rng = DiceRng::new(7);
        rng.enable_tracing();
        let v = rng.rnd(6);
        let w = rng.rn2(10);

        let trace = rng.trace();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].func, "rnd");
        assert_eq!(trace[0].arg, 6);
        assert_eq!(trace[0].result, v as u64);
        assert_eq!(trace[1].func, "rn2");
        assert_eq!(trace[1].arg, 10);
        assert_eq!(trace[1].result, w as u64);
        assert_eq!(rng.call_count(), 2);
    }

    #[test]
    fn test_same_seed_same_trace() {
        let mut rng1 = DiceRng::new(123);
        let mut rng2 = DiceRng::new(123);
        rng1.enable_tracing();
        rng2.enable_tracing();

        for _ in 0..50 {
            rng1.rnd(6);
            rng2.rnd(6);
        }
        assert_eq!(rng1.trace(), rng2.trace());
    }

    #[test]
    fn test_serde_round_trip_restarts_stream() {
        let rng = DiceRng::new(99);
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: DiceRng = serde_json::from_str(&json).unwrap();
        let mut fresh = DiceRng::new(99);

        assert_eq!(restored.seed(), 99);
        for _ in 0..20 {
            assert_eq!(restored.rnd(20), fresh.rnd(20));
        }
    }
}
