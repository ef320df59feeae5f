//! Random sampling primitives: weighted selection and budget partitioning.

pub mod partition;
pub mod weighted;

pub use partition::{generate_partition, PartitionError};
pub use weighted::{SelectorError, WeightedSelector};
