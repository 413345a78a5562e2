//! Shows a histogram of the bucket indices in a hash benchmark file.

use anyhow::Context;
use hashplot::{run, PlotArgs, Variant};

fn main() -> anyhow::Result<()> {
    let args = PlotArgs::parse_for(Variant::Histogram);
    let data_file = args.data_file.clone();

    run(Variant::Histogram, args).with_context(|| format!("failed to plot {data_file}"))?;
    Ok(())
}
