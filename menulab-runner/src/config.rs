//! Serializable simulation configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use menulab_core::domain::{Dish, Menu, MenuError, RunId};

/// Errors from config loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("menu is empty: at least one dish is required")]
    EmptyMenu,
    #[error("turns must be at least 1")]
    ZeroTurns,
    #[error("customers_per_turn must be at least 1")]
    ZeroCustomers,
    #[error("popularity_budget must be positive, got {budget}")]
    NonPositiveBudget { budget: f64 },
    #[error("replicates must be at least 1")]
    ZeroReplicates,
    #[error(transparent)]
    Menu(#[from] MenuError),
}

/// Serializable configuration for a single demand-simulation run.
///
/// This struct captures all parameters needed to reproduce a run:
/// - The acquired menu (dish ids, names, prices), in acquisition order
/// - Turn count and customers per turn
/// - The popularity budget partitioned across the menu each turn
/// - The master RNG seed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    /// Number of game turns to simulate.
    pub turns: usize,

    /// Simulated customers per turn; each customer buys exactly one dish.
    pub customers_per_turn: usize,

    /// Popularity budget split across the menu at each turn start.
    #[serde(default = "default_popularity_budget")]
    pub popularity_budget: f64,

    /// Master RNG seed.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,

    /// Acquired dishes, in acquisition order (the weight-layout order).
    /// Kept last so TOML emits the scalar fields before the dish tables.
    pub menu: Vec<Dish>,
}

fn default_popularity_budget() -> f64 {
    1.0
}

fn default_master_seed() -> u64 {
    42
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            turns: 30,
            customers_per_turn: 40,
            popularity_budget: default_popularity_budget(),
            master_seed: default_master_seed(),
            menu: sample_menu(),
        }
    }
}

/// Built-in sample menu for flag-only CLI runs.
pub fn sample_menu() -> Vec<Dish> {
    vec![
        Dish::new("margherita", "Margherita", 9.5),
        Dish::new("carbonara", "Carbonara", 12.0),
        Dish::new("risotto", "Risotto ai Funghi", 13.5),
        Dish::new("tiramisu", "Tiramisu", 6.0),
    ]
}

impl SimConfig {
    /// Load a config from a TOML file.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parameter ranges the simulation assumes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.menu.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }
        if self.turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        if self.customers_per_turn == 0 {
            return Err(ConfigError::ZeroCustomers);
        }
        if !(self.popularity_budget > 0.0) || !self.popularity_budget.is_finite() {
            return Err(ConfigError::NonPositiveBudget {
                budget: self.popularity_budget,
            });
        }
        Ok(())
    }

    /// Build the validated `Menu` (duplicate ids and bad prices rejected here).
    pub fn build_menu(&self) -> Result<Menu, ConfigError> {
        Ok(Menu::from_dishes(self.menu.iter().cloned())?)
    }

    /// Computes a deterministic hash ID for this configuration.
    ///
    /// Two runs with identical configs (menu, turn structure, seed) share a
    /// RunId; the RNG hierarchy folds the id into every sub-seed.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("SimConfig serialization failed");
        RunId::from_content(json.as_bytes())
    }
}
