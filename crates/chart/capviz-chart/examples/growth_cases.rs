//! The combined growth figure: all three regimes of the capacity heuristic
//! as vertically stacked panels.

use std::fs;
use std::path::Path;

use capviz_chart::{save_panel_chart, ChartSpec, Series};
use capviz_growth_core::{run_sweep, GrowthSweep, SliceGrowth};

fn main() -> anyhow::Result<()> {
    let out_dir = Path::new("target/plots");
    fs::create_dir_all(out_dir)?;

    let policy = SliceGrowth;
    let panels = vec![
        (
            ChartSpec::new(
                "Capacity growth: request beyond doubling",
                "desired length",
                "new capacity",
            )
            .with_markers(true),
            vec![Series::from(&run_sweep(&policy, &GrowthSweep::beyond_doubling()))],
        ),
        (
            ChartSpec::new(
                "Capacity growth: doubling regime (cap < 256)",
                "desired length",
                "new capacity",
            )
            .with_markers(true),
            vec![Series::from(&run_sweep(&policy, &GrowthSweep::doubling_region()))],
        ),
        (
            ChartSpec::new(
                "Capacity growth: amortized regime (cap >= 256)",
                "desired length",
                "new capacity",
            )
            .with_markers(true),
            vec![Series::from(&run_sweep(&policy, &GrowthSweep::amortized_fixed()))],
        ),
    ];

    let out = out_dir.join("growth_cases.png");
    save_panel_chart(&out, (1000, 1000), &panels)?;
    println!("Saved {}", out.display());
    Ok(())
}
