//! Append-by-one simulation: the capacity staircase a policy produces when a
//! buffer is filled element by element from empty.

use serde::{Deserialize, Serialize};

use crate::policy::GrowthPolicy;

/// One reallocation performed during an append trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReallocEvent {
    /// Length that forced the reallocation.
    pub at_len: usize,
    pub old_cap: usize,
    pub new_cap: usize,
}

/// The `(length, capacity)` staircase of a buffer filled from empty, with
/// every reallocation the policy performed along the way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    pub lengths: Vec<usize>,
    pub capacities: Vec<usize>,
    pub reallocs: Vec<ReallocEvent>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Iterate `(length, capacity)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.lengths
            .iter()
            .copied()
            .zip(self.capacities.iter().copied())
    }

    pub fn realloc_count(&self) -> usize {
        self.reallocs.len()
    }

    /// Capacity after the final append; 0 for an empty trajectory.
    pub fn final_capacity(&self) -> usize {
        self.capacities.last().copied().unwrap_or(0)
    }
}

/// Append `final_len` elements one at a time starting from an empty buffer
/// (`len = 0`, `cap = 0`), growing with `policy` whenever the next element
/// does not fit. Records the capacity after every append and each
/// reallocation event. `final_len = 0` yields an empty trajectory.
pub fn append_trajectory<P: GrowthPolicy>(policy: &P, final_len: usize) -> Trajectory {
    let mut lengths = Vec::with_capacity(final_len);
    let mut capacities = Vec::with_capacity(final_len);
    let mut reallocs = Vec::new();
    let mut cap = 0usize;
    for len in 1..=final_len {
        if len > cap {
            let new_cap = policy.next_capacity(len, cap);
            reallocs.push(ReallocEvent {
                at_len: len,
                old_cap: cap,
                new_cap,
            });
            cap = new_cap;
        }
        lengths.push(len);
        capacities.push(cap);
    }
    Trajectory {
        lengths,
        capacities,
        reallocs,
    }
}
