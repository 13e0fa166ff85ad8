//! The large-buffer figure: quarter-step growth once capacity reaches the
//! threshold, with the capacity trailing the request by one.

use std::fs;
use std::path::Path;

use capviz_chart::{save_line_chart, ChartSpec, Series};
use capviz_growth_core::{run_sweep, GrowthSweep, SliceGrowth};

fn main() -> anyhow::Result<()> {
    let out_dir = Path::new("target/plots");
    fs::create_dir_all(out_dir)?;

    let series = run_sweep(&SliceGrowth, &GrowthSweep::amortized_tracking());
    let spec = ChartSpec::new(
        "Capacity growth: amortized regime (cap >= 256)",
        "desired length",
        "new capacity",
    )
    .with_markers(true);

    let out = out_dir.join("amortized_region.png");
    save_line_chart(&out, (1000, 1000), &spec, &[Series::from(&series)])?;
    println!("Saved {}", out.display());
    Ok(())
}
