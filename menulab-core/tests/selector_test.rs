//! Statistical and lifecycle tests for the weighted selector.
//!
//! The frequency tests use a fixed-seed StdRng and generous tolerances
//! (±5% of the expected share over 100k draws), so they are deterministic
//! and do not flake.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

use menulab_core::sampler::{SelectorError, WeightedSelector};

fn draw_frequencies(
    selector: &WeightedSelector<&'static str>,
    draws: usize,
    seed: u64,
) -> HashMap<&'static str, usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for _ in 0..draws {
        let item = selector.select_random(&mut rng).unwrap();
        *counts.entry(item).or_default() += 1;
    }
    counts
}

#[test]
fn frequencies_track_weights() {
    // A:1, B:1, C:2 → expected split 25% / 25% / 50%
    let mut selector = WeightedSelector::new();
    selector.add("A", 1.0).unwrap();
    selector.add("B", 1.0).unwrap();
    selector.add("C", 2.0).unwrap();
    selector.build().unwrap();

    let draws = 100_000;
    let counts = draw_frequencies(&selector, draws, 42);

    let share = |item| counts.get(item).copied().unwrap_or(0) as f64 / draws as f64;
    assert!((share("A") - 0.25).abs() < 0.05 * 0.25 + 0.01, "A: {}", share("A"));
    assert!((share("B") - 0.25).abs() < 0.05 * 0.25 + 0.01, "B: {}", share("B"));
    assert!((share("C") - 0.50).abs() < 0.05 * 0.50, "C: {}", share("C"));

    // C should be roughly double A and B
    let ratio = share("C") / share("A");
    assert!((1.8..2.2).contains(&ratio), "C/A ratio was {ratio}");
}

#[test]
fn heavily_skewed_weights_dominate() {
    let mut selector = WeightedSelector::new();
    selector.add("heavy", 100.0).unwrap();
    selector.add("light", 1.0).unwrap();
    selector.build().unwrap();

    let counts = draw_frequencies(&selector, 1_000, 42);
    let heavy = counts.get("heavy").copied().unwrap_or(0);
    assert!(heavy > 950, "expected heavy > 950/1000, got {heavy}");
}

#[test]
fn every_positive_weight_item_is_reachable() {
    let mut selector = WeightedSelector::new();
    for (item, weight) in [("a", 0.2), ("b", 1.0), ("c", 0.05), ("d", 3.0)] {
        selector.add(item, weight).unwrap();
    }
    selector.build().unwrap();

    let counts = draw_frequencies(&selector, 50_000, 7);
    for item in ["a", "b", "c", "d"] {
        assert!(
            counts.get(item).copied().unwrap_or(0) > 0,
            "item {item} was never drawn"
        );
    }
}

#[test]
fn rebuild_after_add_shifts_distribution() {
    let mut selector = WeightedSelector::new();
    selector.add("old", 1.0).unwrap();
    selector.build().unwrap();

    let counts = draw_frequencies(&selector, 1_000, 1);
    assert_eq!(counts.get("old").copied().unwrap_or(0), 1_000);

    // New item with overwhelming weight takes over after rebuild
    selector.add("new", 99.0).unwrap();
    selector.build().unwrap();

    let counts = draw_frequencies(&selector, 1_000, 1);
    assert!(counts.get("new").copied().unwrap_or(0) > 950);
}

#[test]
fn fresh_selector_reports_not_built() {
    let selector: WeightedSelector<&str> = WeightedSelector::new();
    let mut rng = StdRng::seed_from_u64(1);
    // Unbuilt-and-empty still reports the lifecycle error first
    assert_eq!(
        selector.select_random(&mut rng).unwrap_err(),
        SelectorError::NotBuilt
    );
}

#[test]
fn same_seed_same_draw_sequence() {
    let mut selector = WeightedSelector::new();
    for (item, weight) in [("a", 1.0), ("b", 2.0), ("c", 3.0)] {
        selector.add(item, weight).unwrap();
    }
    selector.build().unwrap();

    let mut rng1 = StdRng::seed_from_u64(9);
    let mut rng2 = StdRng::seed_from_u64(9);
    for _ in 0..200 {
        assert_eq!(
            selector.select_random(&mut rng1).unwrap(),
            selector.select_random(&mut rng2).unwrap()
        );
    }
}
