//! Property tests for the simulation loop.
//!
//! Uses proptest to verify, over arbitrary small configs:
//! 1. Customer conservation — every customer buys exactly one dish per turn
//! 2. Revenue bounds — total revenue sits within [min_price, max_price] × customers

use proptest::prelude::*;

use menulab_runner::{run_simulation, SimConfig};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn customers_are_conserved(
        turns in 1usize..6,
        customers in 1usize..40,
        seed in any::<u64>(),
    ) {
        let config = SimConfig {
            turns,
            customers_per_turn: customers,
            master_seed: seed,
            ..SimConfig::default()
        };
        let report = run_simulation(&config).unwrap();

        prop_assert_eq!(report.customers_served(), (turns * customers) as u64);
        for turn in &report.turn_reports {
            let served: u64 = turn.counts.values().sum();
            prop_assert_eq!(served, customers as u64);
        }
    }

    #[test]
    fn revenue_bounded_by_menu_prices(
        turns in 1usize..6,
        customers in 1usize..40,
        seed in any::<u64>(),
    ) {
        let config = SimConfig {
            turns,
            customers_per_turn: customers,
            master_seed: seed,
            ..SimConfig::default()
        };
        let report = run_simulation(&config).unwrap();

        let total_customers = (turns * customers) as f64;
        let min_price = config.menu.iter().map(|d| d.price).fold(f64::INFINITY, f64::min);
        let max_price = config.menu.iter().map(|d| d.price).fold(0.0, f64::max);

        prop_assert!(report.total_revenue >= min_price * total_customers - 1e-9);
        prop_assert!(report.total_revenue <= max_price * total_customers + 1e-9);
    }
}
