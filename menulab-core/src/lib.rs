//! MenuLab Core — domain types, RNG hierarchy, weighted selection, popularity partitions.
//!
//! This crate contains the heart of the demand simulation:
//! - Domain types (dishes, menus, run identity)
//! - Deterministic RNG hierarchy (master seed → per-stream sub-seeds)
//! - `WeightedSelector<T>`: add/build/select with prefix sums and binary search
//! - `generate_partition`: N non-negative floats summing to a budget
//! - `PopularityTable`: per-turn popularity weights over an acquired menu

pub mod domain;
pub mod popularity;
pub mod rng;
pub mod sampler;
