//! Capacity staircases from repeated single-element appends, comparing the
//! amortized policy against plain doubling.

use std::fs;
use std::path::Path;

use capviz_chart::{save_line_chart, ChartSpec, Series};
use capviz_growth_core::{append_trajectory, Doubling, SliceGrowth};

const FINAL_LEN: usize = 4096;

fn main() -> anyhow::Result<()> {
    let out_dir = Path::new("target/plots");
    fs::create_dir_all(out_dir)?;

    let slice = append_trajectory(&SliceGrowth, FINAL_LEN);
    let doubling = append_trajectory(&Doubling, FINAL_LEN);

    let spec = ChartSpec::new(
        "Capacity staircase: appending one element at a time",
        "length",
        "capacity",
    );

    let out = out_dir.join("append_trajectory.png");
    save_line_chart(
        &out,
        (1000, 600),
        &spec,
        &[
            Series::from(&slice).with_label("slice growth"),
            Series::from(&doubling).with_label("doubling"),
        ],
    )?;

    println!("Saved {}", out.display());
    println!(
        "slice growth: {} reallocations, final capacity {}",
        slice.realloc_count(),
        slice.final_capacity()
    );
    println!(
        "doubling: {} reallocations, final capacity {}",
        doubling.realloc_count(),
        doubling.final_capacity()
    );
    Ok(())
}
