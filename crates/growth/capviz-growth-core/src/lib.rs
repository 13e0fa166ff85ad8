//! capviz Growth Core (renderer-agnostic)
//!
//! Capacity-growth heuristics for growable array-like buffers, plus the
//! drivers that turn them into chartable series: range sweeps over
//! `(desired_len, current_cap)` requests and append-by-one trajectories.
//! This crate is pure computation; rendering lives in the chart adapter.

pub mod policy;
pub mod sweep;
pub mod trajectory;

// Re-exports for consumers (adapters)
pub use policy::{next_capacity, Doubling, GrowthPolicy, SliceGrowth, GROWTH_THRESHOLD};
pub use sweep::{run_sweep, CapacitySource, GrowthSeries, GrowthSweep};
pub use trajectory::{append_trajectory, ReallocEvent, Trajectory};
