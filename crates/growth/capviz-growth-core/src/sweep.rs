//! Sweep drivers: evaluate a growth policy across a range of requests and
//! collect the results as chartable series.
//!
//! A sweep walks `desired_len` over `start..end` by `step`; the paired
//! `current_cap` is either a fixed value or trails the request by one. The
//! canonical constructors reproduce the regimes of the original study
//! figures.

use serde::{Deserialize, Serialize};

use crate::policy::GrowthPolicy;

/// Two equal-length ordered sequences: each desired length paired with the
/// capacity the policy computed for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthSeries {
    pub label: String,
    pub desired_lens: Vec<usize>,
    pub capacities: Vec<usize>,
}

impl GrowthSeries {
    pub fn len(&self) -> usize {
        self.desired_lens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.desired_lens.is_empty()
    }

    /// Iterate `(desired_len, capacity)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.desired_lens
            .iter()
            .copied()
            .zip(self.capacities.iter().copied())
    }
}

/// How the current capacity is derived for each request in a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacitySource {
    /// The same capacity for every request.
    Fixed(usize),
    /// Capacity trails the request by one (`desired_len - 1`).
    BelowDesired,
}

/// A range of desired lengths pushed through a policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthSweep {
    /// Legend label for the series this sweep produces.
    pub label: String,
    /// First desired length (inclusive).
    pub start: usize,
    /// End of the desired-length range (exclusive).
    pub end: usize,
    /// Distance between consecutive desired lengths; 0 is treated as 1.
    pub step: usize,
    pub capacity: CapacitySource,
}

impl GrowthSweep {
    /// Requests past naive doubling of a small fixed capacity; the policy
    /// allocates exactly what is asked for.
    pub fn beyond_doubling() -> Self {
        Self {
            label: "desired > 2*cap (cap = 100)".into(),
            start: 250,
            end: 10_000,
            step: 10,
            capacity: CapacitySource::Fixed(100),
        }
    }

    /// Small buffers with capacity one below the request: the doubling
    /// regime.
    pub fn doubling_region() -> Self {
        Self {
            label: "cap = desired - 1, cap < 256".into(),
            start: 2,
            end: 256,
            step: 1,
            capacity: CapacitySource::BelowDesired,
        }
    }

    /// Requests over a fixed large capacity: the amortized regime from a
    /// standing start.
    pub fn amortized_fixed() -> Self {
        Self {
            label: "cap = 300".into(),
            start: 100,
            end: 10_000,
            step: 10,
            capacity: CapacitySource::Fixed(300),
        }
    }

    /// Large buffers with capacity one below the request: the amortized
    /// regime under steady growth.
    pub fn amortized_tracking() -> Self {
        Self {
            label: "cap = desired - 1".into(),
            start: 256,
            end: 10_000,
            step: 10,
            capacity: CapacitySource::BelowDesired,
        }
    }
}

/// Evaluate `policy` at every desired length in the sweep and collect the
/// resulting capacities. A zero step is treated as 1 so a malformed sweep
/// degrades to the densest scan instead of looping forever.
pub fn run_sweep<P: GrowthPolicy>(policy: &P, sweep: &GrowthSweep) -> GrowthSeries {
    let step = sweep.step.max(1);
    let expected = sweep.end.saturating_sub(sweep.start) / step + 1;
    let mut desired_lens = Vec::with_capacity(expected);
    let mut capacities = Vec::with_capacity(expected);
    let mut desired = sweep.start;
    while desired < sweep.end {
        let current = match sweep.capacity {
            CapacitySource::Fixed(cap) => cap,
            CapacitySource::BelowDesired => desired.saturating_sub(1),
        };
        desired_lens.push(desired);
        capacities.push(policy.next_capacity(desired, current));
        desired = match desired.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    GrowthSeries {
        label: sweep.label.clone(),
        desired_lens,
        capacities,
    }
}
