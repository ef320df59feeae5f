//! Monte Carlo replication — demand distributions across derived seeds.
//!
//! Each replicate is a full simulation seeded from the `"replicate"` stream
//! of the base config's RNG hierarchy, so the batch is deterministic for a
//! given master seed and independent of rayon's scheduling: replicate `k`
//! always receives the same derived seed no matter which worker runs it.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use menulab_core::domain::{DishId, RunId};
use menulab_core::rng::{RngHierarchy, REPLICATE_STREAM};

use crate::config::{ConfigError, SimConfig};
use crate::simulation::{run_simulation, SimError};

// ─── Configuration ───────────────────────────────────────────────────

/// Configuration for Monte Carlo replication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McConfig {
    /// Number of full-simulation replicates (default 200).
    pub n_replicates: usize,
}

impl Default for McConfig {
    fn default() -> Self {
        Self { n_replicates: 200 }
    }
}

// ─── Result types ────────────────────────────────────────────────────

/// Per-dish demand distribution across replicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandStats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: u64,
    pub max: u64,
}

/// Revenue distribution across replicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePercentiles {
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
}

/// Result of a Monte Carlo batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McReport {
    /// Run id of the base config the replicates were derived from.
    pub run_id: RunId,
    pub n_replicates: usize,
    pub demand: BTreeMap<DishId, DemandStats>,
    pub revenue: RevenuePercentiles,
}

// ─── Batch runner ────────────────────────────────────────────────────

/// Run `n_replicates` simulations in parallel and summarize demand.
pub fn run_monte_carlo(config: &SimConfig, mc: &McConfig) -> Result<McReport, SimError> {
    if mc.n_replicates == 0 {
        return Err(SimError::Config(ConfigError::ZeroReplicates));
    }
    config.validate()?;

    let base_run_id = config.run_id();
    let hierarchy = RngHierarchy::new(config.master_seed);

    let reports: Vec<_> = (0..mc.n_replicates as u64)
        .into_par_iter()
        .map(|k| {
            let replicate = SimConfig {
                master_seed: hierarchy.sub_seed(&base_run_id, REPLICATE_STREAM, k),
                ..config.clone()
            };
            run_simulation(&replicate)
        })
        .collect::<Result<_, _>>()?;

    let mut demand = BTreeMap::new();
    for dish in &config.menu {
        let samples: Vec<u64> = reports.iter().map(|r| r.demand_of(&dish.id)).collect();
        demand.insert(dish.id.clone(), summarize_demand(&samples));
    }

    let mut revenues: Vec<f64> = reports.iter().map(|r| r.total_revenue).collect();
    revenues.sort_by(f64::total_cmp);
    let revenue = RevenuePercentiles {
        p5: percentile_sorted(&revenues, 5.0),
        p50: percentile_sorted(&revenues, 50.0),
        p95: percentile_sorted(&revenues, 95.0),
    };

    Ok(McReport {
        run_id: base_run_id,
        n_replicates: mc.n_replicates,
        demand,
        revenue,
    })
}

fn summarize_demand(samples: &[u64]) -> DemandStats {
    let n = samples.len();
    let mean = samples.iter().sum::<u64>() as f64 / n as f64;
    let variance = if n > 1 {
        samples
            .iter()
            .map(|&s| (s as f64 - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64
    } else {
        0.0
    };
    DemandStats {
        mean,
        std_dev: variance.sqrt(),
        min: samples.iter().copied().min().unwrap_or(0),
        max: samples.iter().copied().max().unwrap_or(0),
    }
}

/// Percentile of a sorted slice using linear interpolation.
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}
