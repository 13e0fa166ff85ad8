//! Conversions from the core crates' series types into drawable series.

use capviz_chart::Series;
use capviz_curves_core::exp_decay;
use capviz_growth_core::{append_trajectory, run_sweep, CapacitySource, GrowthSweep, SliceGrowth};

/// it should pair each swept request with its computed capacity
#[test]
fn growth_series_converts_pointwise() {
    let sweep = GrowthSweep {
        label: "fixed cap 300".into(),
        start: 500,
        end: 800,
        step: 100,
        capacity: CapacitySource::Fixed(300),
    };
    let series = Series::from(&run_sweep(&SliceGrowth, &sweep));
    assert_eq!(series.label, "fixed cap 300");
    // 500 and 600 grow by quarter steps from 300; 700 exceeds doubling and
    // is allocated exactly.
    assert_eq!(
        series.points,
        vec![(500.0, 567.0), (600.0, 900.0), (700.0, 700.0)]
    );
}

/// it should carry curve samples across unchanged
#[test]
fn curve_series_converts_pointwise() {
    let series = Series::from(&exp_decay(0.0, 10.0, 100));
    assert_eq!(series.label, "e^-x");
    assert_eq!(series.points.len(), 100);
    assert_eq!(series.points[0], (0.0, 1.0));
}

/// it should expose a trajectory as a relabelable capacity series
#[test]
fn trajectory_converts_with_a_default_label() {
    let trajectory = append_trajectory(&SliceGrowth, 10);
    let series = Series::from(&trajectory).with_label("slice growth");
    assert_eq!(series.label, "slice growth");
    assert_eq!(series.points.len(), 10);
    // After ten appends the doubling staircase sits at capacity 16.
    assert_eq!(series.points[9], (10.0, 16.0));
}
