//! Weighted random choice
//!
//! A [`WeightedTable`] stores cumulative weights next to its values, and one
//! uniform draw in `[0, total)` picks an entry. Priorities, due-date buckets,
//! descriptions and membership counts are all sampled through it.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use worksim_shared::sampling::WeightedTable;
//!
//! let table = WeightedTable::new(vec![("heads", 1.0), ("tails", 1.0)]).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let side = table.sample(&mut rng);
//! assert!(side == "heads" || side == "tails");
//! ```

use crate::error::{SeedError, SeedResult};
use rand::Rng;

/// Table of values with cumulative weights
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(T, f64)>,
    total: f64,
}

impl<T: Clone> WeightedTable<T> {
    /// Builds a table from `(value, weight)` pairs
    ///
    /// Weights do not need to sum to 1.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::InvalidWeights` when the table is empty, a weight
    /// is negative or not finite, or every weight is zero.
    pub fn new(weighted: Vec<(T, f64)>) -> SeedResult<Self> {
        let mut total = 0.0;
        let mut entries = Vec::with_capacity(weighted.len());

        for (value, weight) in weighted {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SeedError::InvalidWeights(format!(
                    "weight {} is not a finite non-negative number",
                    weight
                )));
            }
            total += weight;
            entries.push((value, total));
        }

        if entries.is_empty() || total <= 0.0 {
            return Err(SeedError::InvalidWeights(
                "table has no positive weight".to_string(),
            ));
        }

        Ok(Self { entries, total })
    }

    /// Builds a table giving every value the same weight
    pub fn uniform(values: Vec<T>) -> SeedResult<Self> {
        Self::new(values.into_iter().map(|value| (value, 1.0)).collect())
    }

    /// Draws one value
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let draw = rng.gen::<f64>() * self.total;
        self.pick(draw)
    }

    /// Resolves a point in `[0, total)` to its entry
    fn pick(&self, point: f64) -> T {
        // First cumulative bound strictly above the point
        let idx = self.entries.partition_point(|(_, bound)| *bound <= point);
        let idx = idx.min(self.entries.len() - 1);
        self.entries[idx].0.clone()
    }
}
