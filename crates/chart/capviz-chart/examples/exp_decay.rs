//! Exponential decay over [0, 10], sampled at 100 points.

use std::fs;
use std::path::Path;

use capviz_chart::{save_line_chart, ChartSpec, Series};
use capviz_curves_core::exp_decay;

fn main() -> anyhow::Result<()> {
    let out_dir = Path::new("target/plots");
    fs::create_dir_all(out_dir)?;

    let curve = exp_decay(0.0, 10.0, 100);
    let spec = ChartSpec::new("Graph of e^-x", "x", "e^-x");

    let out = out_dir.join("exp_decay.png");
    save_line_chart(&out, (1000, 600), &spec, &[Series::from(&curve)])?;
    println!("Saved {}", out.display());
    Ok(())
}
