//! MenuLab Runner — simulation orchestration, Monte Carlo replication, artifacts.
//!
//! This crate builds on `menulab-core` to provide:
//! - Serializable run configuration (TOML files or defaults)
//! - The turn-based demand simulation loop
//! - Monte Carlo batches over hash-derived replicate seeds (rayon)
//! - JSON artifact export named by run id

pub mod config;
pub mod export;
pub mod monte_carlo;
pub mod simulation;

pub use config::{sample_menu, ConfigError, SimConfig};
pub use export::{save_mc_report, save_report, ExportError};
pub use monte_carlo::{run_monte_carlo, DemandStats, McConfig, McReport, RevenuePercentiles};
pub use simulation::{run_simulation, SimError, SimReport, TurnReport};
