//! Weighted random selection — inverse-CDF sampling over prebuilt prefix sums.
//!
//! Lifecycle: construct empty → `add` items → `build` → `select_random`
//! repeatedly. Adding after a build marks the selector stale; selection fails
//! until `build` is called again, so a stale cumulative table can never be
//! sampled silently.
//!
//! Key design choices:
//! - Prefix sums + binary search: O(log n) per draw after an O(n) build.
//!   Selection runs once per simulated customer, builds once per turn.
//! - Half-open interval ownership `[cumulative[i-1], cumulative[i])`: a draw
//!   landing exactly on a boundary belongs to the item on its right, so no
//!   item's mass is doubled or dropped.
//! - Zero-weight items are legal and never selected; an all-zero table is a
//!   distinct runtime condition (`EmptyDistribution`), not a panic.

use rand::Rng;
use thiserror::Error;

/// Errors from the weighted selector.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectorError {
    /// `add` was called with a negative (or NaN) weight.
    #[error("weight {weight} is negative: weights must be >= 0")]
    NegativeWeight { weight: f64 },
    /// `build` was called on a selector with no items.
    #[error("cannot build a selector with no items")]
    NoItems,
    /// `select_random`/`select_at` was called before `build`, or after an
    /// `add` invalidated the cumulative table.
    #[error("selector is not built: call build() before selecting")]
    NotBuilt,
    /// Every weight is zero — there is no well-defined weighted choice.
    #[error("total weight is zero: empty distribution")]
    EmptyDistribution,
    /// `select_at` was called with a cursor outside `[0, total_weight)`.
    #[error("cursor {cursor} outside [0, {total_weight})")]
    OutOfRange { cursor: f64, total_weight: f64 },
}

/// Draws a random item with probability proportional to its weight.
///
/// Insertion order is preserved: the cumulative-weight layout, and therefore
/// the mapping from random draws to items, is reproducible for a given
/// add sequence and seed. Duplicate values are permitted; each instance is
/// selectable independently.
///
/// Immutable after `build`: `select_random` and `select_at` take `&self`, so
/// a built selector can be shared across threads for concurrent draws.
#[derive(Debug, Clone)]
pub struct WeightedSelector<T> {
    items: Vec<(T, f64)>,
    /// Monotonically non-decreasing, length `items.len() + 1`, starting at 0
    /// and ending at `total_weight`. Valid only while `built` is set.
    cumulative: Vec<f64>,
    total_weight: f64,
    built: bool,
}

impl<T> Default for WeightedSelector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedSelector<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cumulative: Vec::new(),
            total_weight: 0.0,
            built: false,
        }
    }

    /// Append an item with the given weight.
    ///
    /// Fails on negative weights (NaN fails the `>= 0` check as well) and
    /// leaves the item list unchanged on failure. Marks the selector stale.
    pub fn add(&mut self, value: T, weight: f64) -> Result<(), SelectorError> {
        if !(weight >= 0.0) {
            return Err(SelectorError::NegativeWeight { weight });
        }
        self.items.push((value, weight));
        self.built = false;
        Ok(())
    }

    /// Compute prefix sums over the current items in insertion order.
    ///
    /// Idempotent: may be called again after further `add` calls to pick up
    /// new items. Fails if no items have been added.
    pub fn build(&mut self) -> Result<(), SelectorError> {
        if self.items.is_empty() {
            return Err(SelectorError::NoItems);
        }
        self.cumulative.clear();
        self.cumulative.reserve(self.items.len() + 1);
        self.cumulative.push(0.0);
        let mut running = 0.0;
        for (_, weight) in &self.items {
            running += weight;
            self.cumulative.push(running);
        }
        self.total_weight = running;
        self.built = true;
        Ok(())
    }

    /// Draw a uniform cursor in `[0, total_weight)` and select the owning item.
    pub fn select_random<R: Rng>(&self, rng: &mut R) -> Result<&T, SelectorError> {
        self.ensure_selectable()?;
        let r = rng.gen::<f64>() * self.total_weight;
        if r >= self.total_weight {
            // gen::<f64>() is strictly below 1.0, but the multiply can round
            // up to the total itself; that point belongs to the last item
            // carrying positive weight.
            let (value, _) = self
                .items
                .iter()
                .rev()
                .find(|(_, w)| *w > 0.0)
                .ok_or(SelectorError::EmptyDistribution)?;
            return Ok(value);
        }
        self.select_at(r)
    }

    /// Select the item owning cursor position `r` in `[0, total_weight)`.
    ///
    /// Pure inverse-CDF lookup: the smallest `i` with `cumulative[i] > r`
    /// identifies item `i - 1`. A cursor exactly on a boundary selects the
    /// item to the right of it.
    pub fn select_at(&self, r: f64) -> Result<&T, SelectorError> {
        self.ensure_selectable()?;
        if !(r >= 0.0) || r >= self.total_weight {
            return Err(SelectorError::OutOfRange {
                cursor: r,
                total_weight: self.total_weight,
            });
        }
        // partition_point returns the first index whose cumulative exceeds r.
        // cumulative[0] == 0 <= r, and cumulative[n] == total > r, so the
        // result is always in 1..=n.
        let idx = self.cumulative.partition_point(|&c| c <= r);
        Ok(&self.items[idx - 1].0)
    }

    fn ensure_selectable(&self) -> Result<(), SelectorError> {
        if !self.built {
            return Err(SelectorError::NotBuilt);
        }
        if self.total_weight <= 0.0 {
            return Err(SelectorError::EmptyDistribution);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Sum of all weights as of the last `build` (0 before the first build).
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}
