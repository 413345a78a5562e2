//! Saves a bar chart of element counts per bucket.

use anyhow::Context;
use hashplot::{run, PlotArgs, Variant};

fn main() -> anyhow::Result<()> {
    let args = PlotArgs::parse_for(Variant::BarChart);
    let data_file = args.data_file.clone();

    run(Variant::BarChart, args).with_context(|| format!("failed to plot {data_file}"))?;
    Ok(())
}
