//! Popularity table — per-turn dish weights from a partitioned budget.
//!
//! At the start of each turn the simulation splits a popularity budget across
//! the acquired menu: one random partition piece per dish, assigned in menu
//! order. The table converts into a built [`WeightedSelector`] keyed by
//! `DishId`, ready for one draw per simulated customer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::{DishId, Menu};
use crate::sampler::{generate_partition, PartitionError, SelectorError, WeightedSelector};

/// Popularity weights for one turn, in menu order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularityTable {
    entries: Vec<(DishId, f64)>,
}

impl PopularityTable {
    /// Partition `budget` across the menu's dishes.
    ///
    /// An empty menu surfaces as [`PartitionError::ZeroPieces`] — there is
    /// nothing to assign popularity to.
    pub fn generate<R: Rng>(
        menu: &Menu,
        budget: f64,
        rng: &mut R,
    ) -> Result<Self, PartitionError> {
        let pieces = generate_partition(menu.len(), budget, rng)?;
        let entries = menu
            .dish_ids()
            .cloned()
            .zip(pieces)
            .collect();
        Ok(Self { entries })
    }

    pub fn weight_of(&self, id: &DishId) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, w)| *w)
    }

    /// Iterate entries in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (&DishId, f64)> {
        self.entries.iter().map(|(id, w)| (id, *w))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Build a selector over the table's dishes, weighted by popularity.
    pub fn to_selector(&self) -> Result<WeightedSelector<DishId>, SelectorError> {
        let mut selector = WeightedSelector::new();
        for (id, weight) in &self.entries {
            selector.add(id.clone(), *weight)?;
        }
        selector.build()?;
        Ok(selector)
    }
}
