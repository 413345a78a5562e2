//! Hashes the words of a text and prints the load of every bucket.

use anyhow::Context;
use clap::Parser;
use hashplot::{run_bench, BenchArgs};

fn main() -> anyhow::Result<()> {
    let args = BenchArgs::parse();

    run_bench(&args).with_context(|| format!("failed to benchmark {}", args.text_file.display()))?;
    Ok(())
}
