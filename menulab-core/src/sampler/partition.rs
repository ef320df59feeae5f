//! Random partitioning — split a budget into N non-negative pieces.
//!
//! The construction draws `n - 1` uniform cut points in `[0, total]`, sorts
//! them, and takes the gaps between consecutive cuts (with implicit 0 and
//! `total` boundaries) as the piece sizes. The pieces are exchangeable —
//! each has the same marginal distribution, Dirichlet(1,…,1) scaled by
//! `total` — which is the natural uniform way to split a popularity budget
//! across dishes. Single pass, no retries.

use rand::Rng;
use thiserror::Error;

/// Errors from partition generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PartitionError {
    /// `n == 0`: there is no distribution over zero pieces.
    #[error("cannot partition into zero pieces")]
    ZeroPieces,
    /// `total < 0` (or NaN): piece sizes must be non-negative.
    #[error("cannot partition a negative total {total}")]
    NegativeTotal { total: f64 },
}

/// Generate `n` non-negative floats summing to `total` (within floating-point
/// tolerance; the final gap is taken against `total` itself so the sum
/// telescopes).
///
/// `n == 1` returns `[total]` directly without consuming any randomness.
pub fn generate_partition<R: Rng>(
    n: usize,
    total: f64,
    rng: &mut R,
) -> Result<Vec<f64>, PartitionError> {
    if n == 0 {
        return Err(PartitionError::ZeroPieces);
    }
    if !(total >= 0.0) {
        return Err(PartitionError::NegativeTotal { total });
    }
    if n == 1 {
        return Ok(vec![total]);
    }

    let mut cuts: Vec<f64> = (0..n - 1).map(|_| rng.gen::<f64>() * total).collect();
    cuts.sort_by(f64::total_cmp);

    let mut pieces = Vec::with_capacity(n);
    let mut prev = 0.0;
    for cut in cuts {
        pieces.push(cut - prev);
        prev = cut;
    }
    pieces.push(total - prev);
    Ok(pieces)
}
