//! MenuLab CLI — run demand simulations and Monte Carlo batches.
//!
//! Commands:
//! - `run` — simulate one restaurant run from a TOML config file or the
//!   built-in sample menu; print a demand table and write the report JSON
//! - `mc` — replicate the run under derived seeds and print demand
//!   distributions with revenue percentiles

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use menulab_runner::{
    run_monte_carlo, run_simulation, save_mc_report, save_report, McConfig, McReport, SimConfig,
    SimReport,
};

#[derive(Parser)]
#[command(name = "menulab", about = "MenuLab CLI — turn-based dish-demand simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single run and write its report JSON.
    Run {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Run a Monte Carlo batch of replicates under derived seeds.
    Mc {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of replicates.
        #[arg(long, default_value_t = 200)]
        replicates: usize,
    },
}

#[derive(clap::Args)]
struct CommonArgs {
    /// Path to a TOML config file. Conflicts with the inline flags below.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Master RNG seed (inline mode).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of turns (inline mode).
    #[arg(long)]
    turns: Option<usize>,

    /// Customers per turn (inline mode).
    #[arg(long)]
    customers: Option<usize>,

    /// Output directory for result JSON.
    #[arg(long, default_value = "results")]
    output_dir: PathBuf,
}

impl CommonArgs {
    /// Resolve the simulation config: TOML file, or the built-in sample menu
    /// with inline overrides.
    fn resolve(&self) -> Result<SimConfig> {
        if let Some(path) = &self.config {
            if self.seed.is_some() || self.turns.is_some() || self.customers.is_some() {
                bail!("--config conflicts with --seed/--turns/--customers; pick one mode");
            }
            return Ok(SimConfig::from_toml_path(path)?);
        }

        let mut config = SimConfig::default();
        if let Some(seed) = self.seed {
            config.master_seed = seed;
        }
        if let Some(turns) = self.turns {
            config.turns = turns;
        }
        if let Some(customers) = self.customers {
            config.customers_per_turn = customers;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { common } => {
            let config = common.resolve()?;
            let report = run_simulation(&config)?;
            print_sim_report(&report);
            let path = save_report(&report, &common.output_dir)?;
            println!("\nReport written to {}", path.display());
        }
        Commands::Mc { common, replicates } => {
            let config = common.resolve()?;
            let mc = McConfig {
                n_replicates: replicates,
            };
            let report = run_monte_carlo(&config, &mc)?;
            print_mc_report(&config, &report);
            let path = save_mc_report(&report, &common.output_dir)?;
            println!("\nReport written to {}", path.display());
        }
    }

    Ok(())
}

fn print_sim_report(report: &SimReport) {
    println!("Run {}", report.run_id.short());
    println!(
        "{} turns x {} customers, seed {}",
        report.config.turns, report.config.customers_per_turn, report.config.master_seed
    );
    println!();
    println!("{:<24} {:>8} {:>8} {:>12}", "Dish", "Sold", "Share", "Revenue");

    let served = report.customers_served().max(1) as f64;
    for dish in &report.config.menu {
        let sold = report.demand_of(&dish.id);
        let revenue = sold as f64 * dish.price;
        println!(
            "{:<24} {:>8} {:>7.1}% {:>12.2}",
            dish.name,
            sold,
            100.0 * sold as f64 / served,
            revenue
        );
    }
    println!();
    println!("Total revenue: {:.2}", report.total_revenue);
}

fn print_mc_report(config: &SimConfig, report: &McReport) {
    println!(
        "Monte Carlo over {} replicates (base run {})",
        report.n_replicates,
        report.run_id.short()
    );
    println!();
    println!(
        "{:<24} {:>10} {:>10} {:>8} {:>8}",
        "Dish", "Mean", "StdDev", "Min", "Max"
    );

    for dish in &config.menu {
        if let Some(stats) = report.demand.get(&dish.id) {
            println!(
                "{:<24} {:>10.1} {:>10.1} {:>8} {:>8}",
                dish.name, stats.mean, stats.std_dev, stats.min, stats.max
            );
        }
    }
    println!();
    println!(
        "Revenue p5/p50/p95: {:.2} / {:.2} / {:.2}",
        report.revenue.p5, report.revenue.p50, report.revenue.p95
    );
}
