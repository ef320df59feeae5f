//! Turn-based demand simulation.
//!
//! Control flow per turn: derive the turn RNG from the hierarchy, partition
//! the popularity budget across the menu, build the weighted selector, then
//! draw one dish per simulated customer. Demand counts and the revenue they
//! imply accumulate into per-turn and whole-run reports.
//!
//! Determinism contract: identical config (menu, turns, customers, budget,
//! seed) produces an identical `SimReport`, regardless of what else has
//! consumed randomness in the process.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use menulab_core::domain::{DishId, RunId};
use menulab_core::popularity::PopularityTable;
use menulab_core::rng::{RngHierarchy, TURN_STREAM};
use menulab_core::sampler::{PartitionError, SelectorError};

use crate::config::{ConfigError, SimConfig};

/// Errors from a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("popularity partition failed: {0}")]
    Partition(#[from] PartitionError),
    #[error("customer draw failed: {0}")]
    Selector(#[from] SelectorError),
}

/// Demand outcome of a single turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: usize,
    /// Popularity weight assigned to each dish this turn.
    pub weights: BTreeMap<DishId, f64>,
    /// Customers who bought each dish this turn.
    pub counts: BTreeMap<DishId, u64>,
    /// Revenue implied by the counts at menu prices.
    pub revenue: f64,
}

/// Whole-run demand report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    pub run_id: RunId,
    pub config: SimConfig,
    pub turn_reports: Vec<TurnReport>,
    /// Demand summed across all turns, per dish.
    pub total_demand: BTreeMap<DishId, u64>,
    pub total_revenue: f64,
}

impl SimReport {
    pub fn demand_of(&self, id: &DishId) -> u64 {
        self.total_demand.get(id).copied().unwrap_or(0)
    }

    /// Total customers served across the run.
    pub fn customers_served(&self) -> u64 {
        self.total_demand.values().sum()
    }
}

/// Run the full turn loop for a validated config.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, SimError> {
    config.validate()?;
    let menu = config.build_menu()?;
    let run_id = config.run_id();
    let hierarchy = RngHierarchy::new(config.master_seed);

    let mut turn_reports = Vec::with_capacity(config.turns);
    let mut total_demand: BTreeMap<DishId, u64> =
        menu.dish_ids().map(|id| (id.clone(), 0)).collect();
    let mut total_revenue = 0.0;

    for turn in 0..config.turns {
        let mut rng = hierarchy.rng_for(&run_id, TURN_STREAM, turn as u64);

        let table = PopularityTable::generate(&menu, config.popularity_budget, &mut rng)?;
        let selector = table.to_selector()?;

        let mut counts: BTreeMap<DishId, u64> =
            menu.dish_ids().map(|id| (id.clone(), 0)).collect();
        for _ in 0..config.customers_per_turn {
            let dish = selector.select_random(&mut rng)?;
            if let Some(count) = counts.get_mut(dish) {
                *count += 1;
            }
        }

        let revenue: f64 = counts
            .iter()
            .map(|(id, &count)| {
                let price = menu.get(id).map(|d| d.price).unwrap_or(0.0);
                price * count as f64
            })
            .sum();

        for (id, &count) in &counts {
            if let Some(total) = total_demand.get_mut(id) {
                *total += count;
            }
        }
        total_revenue += revenue;

        turn_reports.push(TurnReport {
            turn,
            weights: table.iter().map(|(id, w)| (id.clone(), w)).collect(),
            counts,
            revenue,
        });
    }

    Ok(SimReport {
        run_id,
        config: config.clone(),
        turn_reports,
        total_demand,
        total_revenue,
    })
}
