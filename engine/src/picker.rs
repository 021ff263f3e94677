//! Weighted picking.
//!
//! A linear-scan inverse-CDF sampler. The walk order over commands is part of
//! the observable contract: floating-point ties resolve to the earliest
//! qualifying entry, so the same seed over the same ordered set always yields
//! the same pick sequence.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;

/// Derive a generator seed from any hashable value.
///
/// `DefaultHasher` uses fixed keys, so the mapping does not change from one
/// run to the next.
pub fn seed_from<H: Hash>(seed: H) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    hasher.finish()
}

/// Picks indices from a weighted list.
///
/// Entries with non-positive weight are dropped once, at construction, and
/// never participate in a draw. Picked values are the indices of the original
/// list, so callers keep their own ordering.
#[derive(Debug, Clone)]
pub struct WeightedPicker {
    /// (original index, weight) for every positively-weighted entry.
    entries: Vec<(usize, f64)>,
    total: f64,
}

impl WeightedPicker {
    /// Build a picker over a list of weights.
    pub fn new<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut entries = Vec::new();
        let mut total = 0.0;
        for (index, weight) in weights.into_iter().enumerate() {
            if weight > 0.0 {
                total += weight;
                entries.push((index, weight));
            }
        }
        Self { entries, total }
    }

    /// Check whether any entry can be picked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pickable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of the pickable weights.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Draw one index, or `None` when nothing is pickable.
    pub fn pick(&self, rng: &mut impl Rng) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }

        let r = rng.gen_range(0.0..self.total);
        let mut v = 0.0;
        for (index, weight) in &self.entries {
            v += weight;
            if v >= r {
                return Some(*index);
            }
        }

        // The running sum repeats the exact additions that produced `total`,
        // so the scan cannot fall through; this guards rounding anyway.
        self.entries.last().map(|(index, _)| *index)
    }
}
