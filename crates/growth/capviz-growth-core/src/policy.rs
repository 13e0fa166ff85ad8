//! Capacity-growth policies.
//!
//! [`SliceGrowth`] mirrors the `nextslicecap` heuristic from Go's runtime
//! (`runtime/slice.go`):
//! - Requests already beyond naive doubling are allocated exactly.
//! - Small buffers (below [`GROWTH_THRESHOLD`]) double.
//! - Large buffers grow by quarter steps biased toward the threshold,
//!   approaching 1.25x per step, until the request is covered.
//!
//! [`next_capacity`] is the canonical entry point; [`GrowthPolicy`] is the
//! seam sweeps and trajectories are written against.

use serde::{Deserialize, Serialize};

/// Capacity separating the doubling regime from the amortized regime.
pub const GROWTH_THRESHOLD: usize = 256;

/// Compute the next capacity for a buffer that must hold at least
/// `desired_len` elements given its `current_cap`.
///
/// The result is always at least `desired_len`. Arguments are unsigned, so
/// the negative-input case is unrepresentable rather than a precondition.
/// If a growth step would overflow `usize`, the request itself is returned
/// instead of a grown capacity.
pub fn next_capacity(desired_len: usize, current_cap: usize) -> usize {
    let doubled = current_cap.saturating_mul(2);
    if desired_len > doubled {
        return desired_len;
    }
    if current_cap < GROWTH_THRESHOLD {
        return doubled;
    }
    let mut new_cap = current_cap;
    while new_cap < desired_len {
        // Go computes this step with a right shift by two; truncating
        // division is load-bearing for the exact intermediate capacities.
        let step = match new_cap.checked_add(3 * GROWTH_THRESHOLD) {
            Some(sum) => sum / 4,
            None => return desired_len,
        };
        match new_cap.checked_add(step) {
            Some(next) => new_cap = next,
            None => return desired_len,
        }
    }
    new_cap
}

/// Seam for evaluating growth heuristics over sweeps and trajectories.
pub trait GrowthPolicy {
    /// Next capacity for a buffer that must hold `desired_len` elements
    /// given `current_cap`.
    fn next_capacity(&self, desired_len: usize, current_cap: usize) -> usize;
}

/// The threshold heuristic this crate studies; delegates to
/// [`next_capacity`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceGrowth;

impl GrowthPolicy for SliceGrowth {
    #[inline]
    fn next_capacity(&self, desired_len: usize, current_cap: usize) -> usize {
        next_capacity(desired_len, current_cap)
    }
}

/// Plain doubling baseline: `max(desired_len, 2 * current_cap)`, saturating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doubling;

impl GrowthPolicy for Doubling {
    #[inline]
    fn next_capacity(&self, desired_len: usize, current_cap: usize) -> usize {
        desired_len.max(current_cap.saturating_mul(2))
    }
}
