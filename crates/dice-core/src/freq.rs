//! Frequency aggregation: reducing roll sequences to counts by key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Group items by key and fold each group into an accumulator.
///
/// The grouping primitive behind [`aggregate`]; the result is keyed in
/// sorted order. Aggregation is commutative in the fold we use, so input
/// order never affects the outcome.
pub fn group_and_reduce<I, K, A, KF, RF>(
    items: I,
    mut key_fn: KF,
    init: A,
    mut fold: RF,
) -> BTreeMap<K, A>
where
    I: IntoIterator,
    K: Ord,
    A: Clone,
    KF: FnMut(&I::Item) -> K,
    RF: FnMut(&mut A, I::Item),
{
    let mut groups = BTreeMap::new();
    for item in items {
        let key = key_fn(&item);
        let acc = groups.entry(key).or_insert_with(|| init.clone());
        fold(acc, item);
    }
    groups
}

/// Mapping from roll total to occurrence count, keys kept sorted.
///
/// Invariant: the counts sum to the number of rolls aggregated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: BTreeMap<u64, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key`.
    pub fn record(&mut self, key: u64) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Occurrences of `key`, 0 if never seen.
    pub fn count(&self, key: u64) -> u64 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of rolls aggregated.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The underlying count map, sorted by key.
    pub fn counts(&self) -> &BTreeMap<u64, u64> {
        &self.counts
    }

    /// Relative frequency per key; empty for an empty table.
    pub fn shares(&self) -> BTreeMap<u64, f64> {
        let total = self.total();
        if total == 0 {
            return BTreeMap::new();
        }
        self.counts
            .iter()
            .map(|(&k, &c)| (k, c as f64 / total as f64))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&k, &c)| (k, c))
    }
}

impl FromIterator<u64> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = u64>>(keys: I) -> Self {
        let mut table = Self::new();
        for key in keys {
            table.record(key);
        }
        table
    }
}

/// Count items grouped by an integer key.
///
/// The canonical key is the roll total, but any deterministic key function
/// works. An empty input yields an empty table.
pub fn aggregate<I, K>(items: I, key_fn: K) -> FrequencyTable
where
    I: IntoIterator,
    K: FnMut(&I::Item) -> u64,
{
    FrequencyTable {
        counts: group_and_reduce(items, key_fn, 0u64, |count, _| *count += 1),
    }
}
