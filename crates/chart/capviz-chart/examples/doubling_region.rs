//! The small-buffer figure: capacity doubles while it stays below the
//! threshold.

use std::fs;
use std::path::Path;

use capviz_chart::{save_line_chart, ChartSpec, Series};
use capviz_growth_core::{run_sweep, GrowthSweep, SliceGrowth};

fn main() -> anyhow::Result<()> {
    let out_dir = Path::new("target/plots");
    fs::create_dir_all(out_dir)?;

    let series = run_sweep(&SliceGrowth, &GrowthSweep::doubling_region());
    let spec = ChartSpec::new(
        "Capacity growth: doubling regime (cap < 256)",
        "desired length",
        "new capacity",
    )
    .with_markers(true);

    let out = out_dir.join("doubling_region.png");
    save_line_chart(&out, (800, 800), &spec, &[Series::from(&series)])?;
    println!("Saved {}", out.display());
    Ok(())
}
